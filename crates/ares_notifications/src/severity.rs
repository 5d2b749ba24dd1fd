#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::{NotificationDuration, NotificationOptions, NotificationPosition};

/// Auto-dismiss delay shared by every severity.
pub const DEFAULT_DURATION_MS: u64 = 7000;

/// Notification categories with preset color, title and icon.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn color(&self) -> &'static str)]
#[func(pub fn default_title(&self) -> &'static str)]
#[func(pub fn default_icon(&self) -> &'static str)]
pub enum Severity {
    #[assoc(color = "success")]
    #[assoc(default_title = "Success")]
    #[assoc(default_icon = "<i class='bx bx-check'></i>")]
    Success,
    #[assoc(color = "danger")]
    #[assoc(default_title = "Error")]
    #[assoc(default_icon = "<i class='bx bx-error-circle'></i>")]
    Error,
    #[assoc(color = "info")]
    #[assoc(default_title = "Info")]
    #[assoc(default_icon = "<i class='bx bx-info-circle'></i>")]
    Info,
    #[assoc(color = "warning")]
    #[assoc(default_title = "Warning")]
    #[assoc(default_icon = "<i class='bx bx-error'></i>")]
    Warning,
    #[assoc(color = "dark")]
    #[assoc(default_title = "Notice")]
    #[assoc(default_icon = "<i class='bx bx-moon'></i>")]
    Dark,
    #[assoc(color = "primary")]
    #[assoc(default_title = "Notification")]
    #[assoc(default_icon = "<i class='bx bx-info-circle'></i>")]
    Primary,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Success,
        Severity::Error,
        Severity::Info,
        Severity::Warning,
        Severity::Dark,
        Severity::Primary,
    ];

    /// Preset options for this severity. `title` falls back to [`Severity::default_title`].
    pub fn options(&self, content: impl Into<String>, title: Option<&str>) -> NotificationOptions {
        let options = NotificationOptions::new()
            .color(self.color())
            .title(title.unwrap_or(self.default_title()))
            .content(content)
            .icon(self.default_icon())
            .flat(true)
            .duration(NotificationDuration::Millis(DEFAULT_DURATION_MS))
            .position(NotificationPosition::BottomRight);

        match self {
            // Dark notices size to their content.
            Severity::Dark => options.width("auto"),
            _ => options,
        }
    }
}
