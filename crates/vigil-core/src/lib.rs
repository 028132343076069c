#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Vigil Core - Foundation types for the command-risk gating hook.
//!
//! This crate provides:
//! - [`RiskLevel`] - the risk tier attached to every decision
//! - [`ToolKind`] and [`ToolInvocation`] - the unit under evaluation
//! - Hook input parsing ([`read_hook_input`]) for the agent's stdin document
//! - Small string utilities shared across crates

pub mod input;
pub mod invocation;
pub mod types;
pub mod utils;

pub use input::{HookInput, TaskNotice, read_hook_input, read_task_notice};
pub use invocation::{ToolInvocation, ToolKind};
pub use types::RiskLevel;
pub use utils::truncate;
