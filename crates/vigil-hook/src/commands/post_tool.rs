//! The post-tool dismiss.
//!
//! Once the tool has actually run the pending notification is stale;
//! tell the approver to close it. The approver being down is the normal
//! case here (nothing was ever shown) and is not worth more than a trace.

use anyhow::Result;
use tracing::debug;

use vigil_config::Config;
use vigil_core::read_hook_input;

use super::approver_client;

/// Dismiss the notification matching the completed tool use.
pub async fn run(config: &Config) -> Result<()> {
    let Some(invocation) = read_hook_input(std::io::stdin().lock()) else {
        return Ok(());
    };
    let Some(tool_use_id) = invocation.tool_use_id.as_deref() else {
        debug!("no tool_use_id on post-tool input, nothing to dismiss");
        return Ok(());
    };

    let client = approver_client(&config.approver);
    if let Err(e) = client.dismiss(tool_use_id).await {
        debug!(error = %e, "dismiss not delivered");
    }
    Ok(())
}
