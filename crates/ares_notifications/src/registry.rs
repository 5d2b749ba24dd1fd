use indexmap::IndexMap;

use crate::{
    ComponentProps, NotificationDuration, NotificationId, NotificationOptions,
    NotificationPosition, NotificationRecord, NotificationUpdate, Severity,
};

/// Ordered stack of active notifications.
///
/// Insertion order is display order. Ids are handed out from a counter that
/// starts at 1 and is never rewound, so an id is never reused, not even after
/// [`NotificationRegistry::clear_all`].
///
/// Lookups that miss are silent no-ops: a stale handle or a late auto-dismiss
/// timer must never be able to fail the caller.
#[derive(Debug, Default)]
pub struct NotificationRegistry {
    entries: IndexMap<NotificationId, NotificationRecord>,
    last_id: u64,
}

impl NotificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> NotificationId {
        self.last_id += 1;
        NotificationId(self.last_id)
    }

    /// Appends a notification built from `options` as given, without any defaults.
    pub fn add(&mut self, options: NotificationOptions) -> NotificationHandle {
        let id = self.next_id();
        self.entries.insert(id, NotificationRecord { id, options });
        NotificationHandle { id }
    }

    /// Applies `updates` to the notification in place. Returns `false` if it no longer exists.
    ///
    /// Fields touched by `updates` overwrite or clear the current ones, with one
    /// exception: when the notification already embeds a component and `updates`
    /// sets new props without setting a component, the props are merged key by
    /// key so the embedded component keeps its state.
    pub fn update(&mut self, id: NotificationId, updates: impl Into<NotificationUpdate>) -> bool {
        let Some(current) = self.entries.get_mut(&id) else {
            return false;
        };

        let mut updates = updates.into();
        if !matches!(updates.component, Some(Some(_)))
            && current.options.component.is_some()
            && let Some(Some(props)) = updates.component_props.take_if(|props| props.is_some())
        {
            current
                .options
                .component_props
                .get_or_insert_with(ComponentProps::new)
                .extend(props);
        }

        updates.apply_to(&mut current.options);
        true
    }

    /// Removes a notification, keeping the order of the rest. Returns `false` if it was not found.
    pub fn remove_notification(&mut self, id: NotificationId) -> bool {
        self.entries.shift_remove(&id).is_some()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Adds a notification with the presets of `severity`.
    ///
    /// Anything set in `options` wins over the presets, including the title and icon.
    pub fn notify(
        &mut self,
        severity: Severity,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.add(severity.options(content, title).with_overrides(options))
    }

    pub fn success(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.notify(Severity::Success, content, title, options)
    }

    pub fn error(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.notify(Severity::Error, content, title, options)
    }

    pub fn info(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.notify(Severity::Info, content, title, options)
    }

    pub fn warning(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.notify(Severity::Warning, content, title, options)
    }

    /// Alias of [`NotificationRegistry::warning`].
    pub fn warn(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.warning(content, title, options)
    }

    pub fn dark(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.notify(Severity::Dark, content, title, options)
    }

    pub fn primary(
        &mut self,
        content: impl Into<String>,
        title: Option<&str>,
        options: NotificationOptions,
    ) -> NotificationHandle {
        self.notify(Severity::Primary, content, title, options)
    }

    /// Adds a loading notification that stays until it is removed.
    ///
    /// Meant for long-running work: keep the handle, `update` it once the work
    /// settles, then remove it.
    pub fn create(&mut self, options: NotificationOptions) -> NotificationHandle {
        let presets = NotificationOptions::new()
            .color(Severity::Primary.color())
            .title("Loading")
            .content("Please wait...")
            .loading(true)
            .duration(NotificationDuration::Persistent)
            .button_close(false)
            .not_padding(false)
            .square(false)
            .width("auto")
            .position(NotificationPosition::BottomRight)
            .component_props(ComponentProps::new());

        self.add(presets.with_overrides(options))
    }

    /// Alias of [`NotificationRegistry::create`] for transaction progress.
    pub fn tx(&mut self, options: NotificationOptions) -> NotificationHandle {
        self.create(options)
    }

    /// Active notifications in display order.
    pub fn notifications(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.entries.values()
    }

    pub fn get(&self, id: NotificationId) -> Option<&NotificationRecord> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Handle to a single notification, returned when it is added.
///
/// It only holds the id; every call goes through the registry that created it.
/// Once the notification is gone all calls are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle {
    id: NotificationId,
}

impl NotificationHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn update(
        &self,
        registry: &mut NotificationRegistry,
        updates: impl Into<NotificationUpdate>,
    ) -> bool {
        registry.update(self.id, updates)
    }

    pub fn remove(&self, registry: &mut NotificationRegistry) -> bool {
        registry.remove_notification(self.id)
    }

    /// Alias of [`NotificationHandle::remove`].
    pub fn close(&self, registry: &mut NotificationRegistry) -> bool {
        self.remove(registry)
    }
}

impl From<NotificationId> for NotificationHandle {
    fn from(id: NotificationId) -> Self {
        Self { id }
    }
}
