//! Task-complete pass-through.
//!
//! No classification and no auto-start: if the approver is not already
//! up there is nobody watching for completion notices.

use anyhow::Result;
use tracing::debug;

use vigil_config::Config;
use vigil_core::read_task_notice;
use vigil_notify::NotificationEnvelope;

use super::approver_client;

/// Forward a task-complete notice to the approver.
pub async fn run(config: &Config) -> Result<()> {
    let Some(notice) = read_task_notice(std::io::stdin().lock()) else {
        return Ok(());
    };

    let envelope = NotificationEnvelope::for_task_notice(&notice);
    let client = approver_client(&config.approver);
    if let Err(e) = client.notify(&envelope).await {
        debug!(error = %e, "completion notice not delivered");
    }
    Ok(())
}
