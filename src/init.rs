use gpui::App;

use crate::{notification, theme};

/// Installs the notification registry and restores the saved theme.
///
/// Call [`theme::use_preference_store`] first to persist the theme somewhere
/// other than memory.
pub fn init(cx: &mut App) {
    notification::init(cx);
    theme::init(cx);
}
