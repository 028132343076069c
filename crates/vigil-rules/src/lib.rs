#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Risk classification rules for the vigil gating hook.
//!
//! Three pieces, leaves first:
//! - [`table`] - the ordered pattern tables defining what counts as
//!   high-risk versus medium-risk command text
//! - [`compound`] - reduction of chained shell commands to the trailing
//!   command that actually matters
//! - [`classify`] - the pure classifier combining both
//!
//! Classification is deterministic, performs no I/O, and cannot fail: a
//! command matching nothing is simply low risk.

pub mod classify;
pub mod compound;
pub mod table;

pub use classify::{Classifier, RiskVerdict};
pub use compound::{has_compound_operators, resolve_command};
pub use table::{RiskRule, RuleSet};
