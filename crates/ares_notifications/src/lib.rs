//! In-memory notification stack for UI toolkits.
//!
//! [`NotificationRegistry`] keeps the ordered list of active notifications and
//! hands out [`NotificationHandle`]s for updating or removing a single entry.
//! Rendering and auto-dismiss timing are left to the caller; the registry only
//! stores what it is given.

mod record;
pub use record::*;

mod severity;
pub use severity::*;

mod update;
pub use update::*;

mod registry;
pub use registry::*;
