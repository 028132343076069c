//! vigil-hook - risk gating for agent tool use.
//!
//! Installed as an agent hook, fired once per event with a JSON document
//! on stdin. The hook observes and notifies; it never blocks the action,
//! and it exits 0 on every path so a broken gate cannot take the agent
//! down with it.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use vigil_config::Config;

mod commands;
mod decision;

/// Risk gating hook for agent tool use.
#[derive(Parser)]
#[command(name = "vigil-hook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a tool use before it runs and notify the approver
    PreTool,

    /// Dismiss the matching notification after the tool ran
    PostTool,

    /// Forward a task-complete notice to the approver
    Notification,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // A broken config file must not disable the gate.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "config load failed, using defaults");
            Config::default()
        },
    };

    let result = match cli.command {
        Commands::PreTool => commands::pre_tool::run(&config).await,
        Commands::PostTool => commands::post_tool::run(&config).await,
        Commands::Notification => commands::notification::run(&config).await,
    };

    // Exit 0 on every path: the hook observes, it never blocks.
    if let Err(e) = result {
        warn!(error = %e, "hook run failed");
    }
}
