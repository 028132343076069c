#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Context enrichment for the vigil gating hook.
//!
//! For a closed set of especially consequential command shapes (remote
//! push, recursive delete, remote login, hard reset, forced branch delete)
//! this crate performs bounded, read-only introspection - git queries with
//! explicit timeouts, capped directory walks - and produces a concrete,
//! quantified description of what would be affected.
//!
//! Enrichment is advisory. Every failure path (missing binary, not a
//! repository, timeout) degrades to an absent context and never alters the
//! risk verdict.

pub mod enrich;
pub mod git;
pub mod shape;
pub mod targets;

pub use enrich::{EnrichOptions, enrich};
pub use shape::CommandShape;
