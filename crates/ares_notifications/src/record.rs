use std::{fmt, ops::Deref, time::Duration};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

/// Wire form of [`NotificationDuration::Persistent`].
const PERSISTENT_SENTINEL: &str = "none";

/// Identity of a notification, assigned by the registry on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub(crate) u64);

impl NotificationId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How long a notification stays on screen before it is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationDuration {
    /// Dismiss after this many milliseconds.
    Millis(u64),
    /// Never dismissed automatically, only by an explicit remove.
    Persistent,
}

impl NotificationDuration {
    /// Returns the time until auto-dismiss, or `None` for persistent notifications.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Millis(millis) => Some(Duration::from_millis(*millis)),
            Self::Persistent => None,
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Persistent)
    }
}

impl From<Duration> for NotificationDuration {
    fn from(duration: Duration) -> Self {
        Self::Millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

impl Serialize for NotificationDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Millis(millis) => serializer.serialize_u64(*millis),
            Self::Persistent => serializer.serialize_str(PERSISTENT_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for NotificationDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MillisOrSentinel {
            Millis(u64),
            Sentinel(String),
        }

        match MillisOrSentinel::deserialize(deserializer)? {
            MillisOrSentinel::Millis(millis) => Ok(Self::Millis(millis)),
            MillisOrSentinel::Sentinel(string) if string == PERSISTENT_SENTINEL => {
                Ok(Self::Persistent)
            }
            MillisOrSentinel::Sentinel(string) => Err(D::Error::custom(format!(
                "expected milliseconds or \"{PERSISTENT_SENTINEL}\", got \"{string}\""
            ))),
        }
    }
}

/// Screen zone a notification is stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

/// Opaque reference to custom content embedded in a notification.
///
/// Only the rendering surface knows how to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Parameters handed to the embedded component.
pub type ComponentProps = serde_json::Map<String, serde_json::Value>;

/// Every field a notification can carry.
///
/// `None` means "not specified". Presentation values are never interpreted by
/// the registry. To change an existing notification, see [`crate::NotificationUpdate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<NotificationDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<NotificationPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_padding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_props: Option<ComponentProps>,
}

macro_rules! option_setters {
    ( $( $(#[$meta:meta])* $field:ident: $ty:ty ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, $field: impl Into<$ty>) -> Self {
                self.$field = Some($field.into());
                self
            }
        )+
    };
}

macro_rules! overwrite_present {
    ( $target:ident, $source:ident; $( $field:ident ),+ $(,)? ) => {
        $(
            if $source.$field.is_some() {
                $target.$field = $source.$field;
            }
        )+
    };
}

impl NotificationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    option_setters!(
        /// Sets the semantic color tag, e.g. `success` or `danger`.
        color: String,
        title: String,
        content: String,
        /// Sets the leading icon markup.
        icon: String,
        duration: NotificationDuration,
        position: NotificationPosition,
        loading: bool,
        flat: bool,
        square: bool,
        not_padding: bool,
        /// Shows or hides the close button.
        button_close: bool,
        width: String,
        /// Sets the embedded custom content.
        component: ComponentRef,
        component_props: ComponentProps,
    );

    /// Overwrites every field that `overrides` specifies. Unspecified fields are kept.
    pub fn merge(&mut self, overrides: NotificationOptions) {
        overwrite_present!(
            self, overrides;
            color,
            title,
            content,
            icon,
            duration,
            position,
            loading,
            flat,
            square,
            not_padding,
            button_close,
            width,
            component,
            component_props,
        );
    }

    /// Consuming form of [`NotificationOptions::merge`].
    pub fn with_overrides(mut self, overrides: NotificationOptions) -> Self {
        self.merge(overrides);
        self
    }
}

/// A notification as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: NotificationId,
    #[serde(flatten)]
    pub options: NotificationOptions,
}

impl Deref for NotificationRecord {
    type Target = NotificationOptions;

    fn deref(&self) -> &Self::Target {
        &self.options
    }
}
