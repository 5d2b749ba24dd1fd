//! Notification stack bound to the gpui app.
//!
//! Each [`App`] owns one [`NotificationRegistry`] entity. Rendering surfaces
//! observe that entity and re-render whenever it notifies; everything else
//! talks to it through [`NotificationExt`] and the [`NotificationController`]s
//! it returns.

use gpui::{App, AppContext, Entity, Global};

pub use ares_notifications::{
    ComponentProps, ComponentRef, DEFAULT_DURATION_MS, NotificationDuration, NotificationId,
    NotificationOptions, NotificationPosition, NotificationRecord, NotificationRegistry,
    NotificationUpdate, Severity,
};

mod controller;
pub use controller::*;

mod ext;
pub use ext::*;

pub(crate) struct GlobalNotifications(pub(crate) Entity<NotificationRegistry>);

impl Global for GlobalNotifications {}

/// Installs the app's notification registry. Calling it again keeps the existing one.
pub fn init(cx: &mut App) {
    if cx.has_global::<GlobalNotifications>() {
        return;
    }

    let registry = cx.new(|_cx| NotificationRegistry::new());
    cx.set_global(GlobalNotifications(registry));
}
