//! Theme selection with a persisted user preference.
//!
//! The active theme is an app global; changing it refreshes every window and
//! stores the choice through a [`PreferenceStore`] so it survives restarts.

mod name;
pub use name::*;

mod store;
pub use store::*;

mod ext;
pub use ext::*;
