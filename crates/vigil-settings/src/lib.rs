#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Allow-list resolution for the vigil gating hook.
//!
//! Permission documents are plain JSON files carrying a
//! `permissions.allow` list of pattern strings (`Tool`, `Tool(exact arg)`,
//! `Tool(prefix:*)`). They are discovered in layers: the user-global agent
//! directory first, then every ancestor of the working directory up to the
//! filesystem root. All layers are unioned; the first matching entry in
//! load order authorizes the invocation.
//!
//! This resolver is deliberately forgiving about its inputs - a missing or
//! malformed document is skipped, never fatal - and deliberately strict
//! about compound commands: matching always runs against the resolved
//! effective command, never a hand-picked substring.

pub mod entry;
pub mod loader;

pub use entry::{ArgPattern, PermissionEntry};
pub use loader::{AllowList, is_preauthorized};
