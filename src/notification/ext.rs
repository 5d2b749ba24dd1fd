use gpui::{App, Entity};

use crate::notification::{
    GlobalNotifications, NotificationController, NotificationId, NotificationOptions,
    NotificationRegistry, Severity,
};

/// Extension trait for showing and dismissing notifications.
///
/// The registry is installed on first use if [`crate::notification::init`]
/// has not run yet.
pub trait NotificationExt {
    /// Gets the app's registry entity. Observe it to re-render on changes.
    fn notifications(&mut self) -> Entity<NotificationRegistry>;

    /// Adds a notification exactly as described by `options`.
    fn add_notification(&mut self, options: NotificationOptions) -> NotificationController;

    /// Removes a notification by id. Unknown ids are ignored.
    fn remove_notification(&mut self, id: NotificationId) -> bool;

    /// Removes every notification.
    fn clear_notifications(&mut self);

    /// Adds a notification with the presets of `severity`, overridden by `options`.
    fn notify_severity(
        &mut self,
        severity: Severity,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController;

    /// Adds a persistent loading notification.
    fn create_notification(&mut self, options: NotificationOptions) -> NotificationController;

    fn notify_success(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.notify_severity(Severity::Success, content, title, options)
    }

    fn notify_error(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.notify_severity(Severity::Error, content, title, options)
    }

    fn notify_info(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.notify_severity(Severity::Info, content, title, options)
    }

    fn notify_warning(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.notify_severity(Severity::Warning, content, title, options)
    }

    /// Alias of [`NotificationExt::notify_warning`].
    fn notify_warn(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.notify_warning(content, title, options)
    }

    fn notify_dark(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.notify_severity(Severity::Dark, content, title, options)
    }

    fn notify_primary(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.notify_severity(Severity::Primary, content, title, options)
    }

    /// Alias of [`NotificationExt::create_notification`] for transaction progress.
    fn create_tx(&mut self, options: NotificationOptions) -> NotificationController {
        self.create_notification(options)
    }
}

impl NotificationExt for App {
    fn notifications(&mut self) -> Entity<NotificationRegistry> {
        crate::notification::init(self);
        self.global::<GlobalNotifications>().0.clone()
    }

    fn add_notification(&mut self, options: NotificationOptions) -> NotificationController {
        let registry = self.notifications();
        let handle = registry.update(self, |registry, cx| {
            let handle = registry.add(options);
            cx.notify();
            handle
        });

        NotificationController::new(handle.id(), registry.downgrade())
    }

    fn remove_notification(&mut self, id: NotificationId) -> bool {
        self.notifications().update(self, |registry, cx| {
            let removed = registry.remove_notification(id);
            if removed {
                cx.notify();
            }
            removed
        })
    }

    fn clear_notifications(&mut self) {
        self.notifications().update(self, |registry, cx| {
            if registry.is_empty() {
                return;
            }

            registry.clear_all();
            cx.notify();
        });
    }

    fn notify_severity(
        &mut self,
        severity: Severity,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationController {
        self.add_notification(severity.options(content, title).with_overrides(options))
    }

    fn create_notification(&mut self, options: NotificationOptions) -> NotificationController {
        let registry = self.notifications();
        let handle = registry.update(self, |registry, cx| {
            let handle = registry.create(options);
            cx.notify();
            handle
        });

        NotificationController::new(handle.id(), registry.downgrade())
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::notification::NotificationDuration;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_registry_is_per_app(cx: &mut TestAppContext) {
        cx.update(|cx| {
            crate::notification::init(cx);
            let first = cx.notifications();
            crate::notification::init(cx);
            let second = cx.notifications();

            assert_eq!(first.entity_id(), second.entity_id());
            assert!(first.read(cx).is_empty(), "A fresh app starts empty");
        });
    }

    #[gpui::test]
    fn test_add_notification_appends(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let first = cx.add_notification(NotificationOptions::new().title("first"));
            let second = cx.add_notification(NotificationOptions::new().title("second"));

            let registry = cx.notifications();
            let titles: Vec<_> = registry
                .read(cx)
                .notifications()
                .map(|n| n.title.clone().unwrap_or_default())
                .collect();

            assert_eq!(titles, ["first", "second"]);
            assert!(second.id() > first.id(), "Ids should increase");
        });
    }

    #[gpui::test]
    fn test_notify_success_presets(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let controller = cx.notify_success(
                "Saved",
                None,
                NotificationOptions::new().duration(NotificationDuration::Millis(3000)),
            );

            let registry = cx.notifications();
            let record = registry.read(cx).get(controller.id()).unwrap();

            assert_eq!(record.color.as_deref(), Some("success"));
            assert_eq!(record.title.as_deref(), Some("Success"));
            assert_eq!(record.duration, Some(NotificationDuration::Millis(3000)));
        });
    }

    #[gpui::test]
    fn test_create_notification_is_persistent(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let controller = cx.create_notification(NotificationOptions::new());

            let registry = cx.notifications();
            let record = registry.read(cx).get(controller.id()).unwrap();

            assert_eq!(record.duration, Some(NotificationDuration::Persistent));
            assert_eq!(record.loading, Some(true));
            assert_eq!(record.button_close, Some(false));
        });
    }

    #[gpui::test]
    fn test_aliases_match_their_targets(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let warn = cx.notify_warn("Low balance", None, NotificationOptions::new());
            let tx = cx.create_tx(NotificationOptions::new().title("Signing"));

            let registry = cx.notifications();
            let registry = registry.read(cx);

            let warn = registry.get(warn.id()).unwrap();
            assert_eq!(warn.color.as_deref(), Some("warning"));
            assert_eq!(warn.title.as_deref(), Some("Warning"));

            let tx = registry.get(tx.id()).unwrap();
            assert_eq!(tx.title.as_deref(), Some("Signing"));
            assert_eq!(tx.loading, Some(true));
            assert_eq!(tx.duration, Some(NotificationDuration::Persistent));
        });
    }

    #[gpui::test]
    fn test_remove_and_clear(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let info = cx.notify_info("a", None, NotificationOptions::new());
            cx.notify_warning("b", None, NotificationOptions::new());

            assert!(cx.remove_notification(info.id()));
            assert!(!cx.remove_notification(info.id()));
            assert_eq!(cx.notifications().read(cx).len(), 1);

            cx.clear_notifications();
            assert!(cx.notifications().read(cx).is_empty());
        });
    }

    #[gpui::test]
    fn test_observers_see_changes(cx: &mut TestAppContext) {
        let notify_count = Rc::new(Cell::new(0));

        let _subscription = cx.update(|cx| {
            let registry = cx.notifications();
            let notify_count = notify_count.clone();
            cx.observe(&registry, move |_registry, _cx| {
                notify_count.set(notify_count.get() + 1);
            })
        });

        let controller =
            cx.update(|cx| cx.notify_error("Failed", None, NotificationOptions::new()));
        assert_eq!(notify_count.get(), 1, "Adding should notify observers");

        cx.update(|cx| controller.remove(cx));
        assert_eq!(notify_count.get(), 2, "Removing should notify observers");

        cx.update(|cx| controller.remove(cx));
        assert_eq!(
            notify_count.get(),
            2,
            "A no-op removal should not notify observers"
        );
    }
}
