#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Client side of the approval front end.
//!
//! The front end is a separate desktop process with a small local HTTP
//! surface: `POST /api/notify`, `POST /api/dismiss`, `GET /api/health`.
//! Everything here is fire-and-forget from the hook's point of view:
//! errors are surfaced as [`NotifyError`] for the caller to log and drop,
//! never to propagate into an exit status.

pub mod bootstrap;
pub mod client;
pub mod envelope;

pub use bootstrap::{StartOptions, ensure_running};
pub use client::{ApproverClient, NotifyError, NotifyResult};
pub use envelope::NotificationEnvelope;
