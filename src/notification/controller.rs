use gpui::{App, Task, WeakEntity};

use crate::notification::{NotificationId, NotificationRegistry, NotificationUpdate};

/// Handle to one notification in an app's registry.
///
/// Holds the notification id and a weak reference to the registry. When either
/// the notification or the registry is gone, every method is a no-op.
#[derive(Debug, Clone)]
pub struct NotificationController {
    id: NotificationId,
    registry: WeakEntity<NotificationRegistry>,
}

impl NotificationController {
    pub(crate) fn new(id: NotificationId, registry: WeakEntity<NotificationRegistry>) -> Self {
        Self { id, registry }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Whether the notification is still in the registry.
    pub fn is_active(&self, cx: &App) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.read(cx).contains(self.id))
    }

    /// Merges `updates` into the notification. See [`NotificationRegistry::update`].
    pub fn update(&self, cx: &mut App, updates: impl Into<NotificationUpdate>) -> bool {
        let id = self.id;
        self.registry
            .update(cx, |registry, cx| {
                let updated = registry.update(id, updates);
                if updated {
                    cx.notify();
                }
                updated
            })
            .unwrap_or(false)
    }

    pub fn remove(&self, cx: &mut App) -> bool {
        let id = self.id;
        self.registry
            .update(cx, |registry, cx| {
                let removed = registry.remove_notification(id);
                if removed {
                    cx.notify();
                }
                removed
            })
            .unwrap_or(false)
    }

    /// Alias of [`NotificationController::remove`].
    pub fn close(&self, cx: &mut App) -> bool {
        self.remove(cx)
    }

    /// Starts the auto-dismiss timer for this notification.
    ///
    /// Returns `None` for persistent notifications and for ones that are already
    /// gone. Dropping the returned task cancels the timer.
    pub fn schedule_dismiss(&self, cx: &mut App) -> Option<Task<()>> {
        let registry = self.registry.upgrade()?;
        let delay = registry.read(cx).get(self.id)?.duration?.as_duration()?;
        let controller = self.clone();

        Some(cx.spawn(async move |cx| {
            cx.background_executor().timer(delay).await;

            // The notification may have been closed while we waited.
            let _ = controller.registry.update(cx, |registry, cx| {
                if registry.remove_notification(controller.id) {
                    cx.notify();
                }
            });
        }))
    }
}
