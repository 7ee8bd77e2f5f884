//! Operation tracking primitives shared by every screen.
//!
//! - [`BusyTracker`] counts in-flight operations and broadcasts a derived
//!   busy flag.
//! - [`FailureBroadcaster`] republishes operation failures to independent
//!   observers while still returning them to the caller.

mod busy;
mod failure;

pub use busy::{BusyGuard, BusyTracker};
pub use failure::{FailureBroadcaster, OperationId, TrackedFailure};
