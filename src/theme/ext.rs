use gpui::{App, Global};

use crate::theme::{MemoryPreferenceStore, PreferenceStore, ThemeName};

/// Preference key the chosen theme is stored under.
pub const THEME_STORAGE_KEY: &str = "aresrpg-ui-theme";

/// The theme currently applied to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTheme(pub ThemeName);

impl Global for ActiveTheme {}

pub(crate) struct ThemePreferences(pub(crate) Box<dyn PreferenceStore>);

impl Default for ThemePreferences {
    fn default() -> Self {
        Self(Box::new(MemoryPreferenceStore::new()))
    }
}

impl Global for ThemePreferences {}

/// Sets where the theme choice is persisted. Without this, it is kept in memory only.
pub fn use_preference_store(cx: &mut App, store: impl PreferenceStore) {
    cx.set_global(ThemePreferences(Box::new(store)));
}

/// Restores the saved theme.
pub fn init(cx: &mut App) {
    cx.init_theme();
}

/// Extension trait for reading and switching the active theme.
pub trait ThemeExt {
    /// Applies `theme`, refreshes windows and persists the choice.
    fn set_theme(&mut self, theme: ThemeName);

    /// Applies the theme called `name`, falling back to [`ThemeName::Dark`] for unknown names.
    fn set_theme_by_name(&mut self, name: &str);

    /// Gets the active theme, [`ThemeName::Dark`] if none was set.
    fn get_theme(&self) -> ThemeName;

    /// Switches to the next theme in [`ThemeName::ALL`].
    fn toggle_theme(&mut self);

    /// Applies the persisted theme, or [`ThemeName::Dark`] if there is no valid one.
    fn init_theme(&mut self);
}

impl ThemeExt for App {
    fn set_theme(&mut self, theme: ThemeName) {
        self.set_global(ActiveTheme(theme));

        if let Err(err) = self
            .default_global::<ThemePreferences>()
            .0
            .set(THEME_STORAGE_KEY, theme.as_str())
        {
            log::warn!("failed to persist theme \"{theme}\": {err}");
        }

        self.refresh_windows();
    }

    fn set_theme_by_name(&mut self, name: &str) {
        let theme = name.parse::<ThemeName>().unwrap_or_else(|err| {
            log::warn!("{err}. Using '{}' as fallback.", ThemeName::default());
            ThemeName::default()
        });

        self.set_theme(theme);
    }

    fn get_theme(&self) -> ThemeName {
        self.try_global::<ActiveTheme>()
            .map(|active| active.0)
            .unwrap_or_default()
    }

    fn toggle_theme(&mut self) {
        let next = self.get_theme().next();
        self.set_theme(next);
    }

    fn init_theme(&mut self) {
        let saved = self
            .default_global::<ThemePreferences>()
            .0
            .get(THEME_STORAGE_KEY)
            .unwrap_or_else(|err| {
                log::warn!("failed to read saved theme: {err}");
                None
            });

        let theme = saved
            .and_then(|name| name.parse::<ThemeName>().ok())
            .unwrap_or_default();

        self.set_theme(theme);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::theme::FilePreferenceStore;
    use gpui::TestAppContext;

    fn saved_theme(cx: &mut App) -> Option<String> {
        cx.default_global::<ThemePreferences>()
            .0
            .get(THEME_STORAGE_KEY)
            .unwrap()
    }

    #[gpui::test]
    fn test_default_theme_is_dark(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert_eq!(cx.get_theme(), ThemeName::Dark);
        });
    }

    #[gpui::test]
    fn test_set_theme_persists(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(ThemeName::Neumorphism);

            assert_eq!(cx.get_theme(), ThemeName::Neumorphism);
            assert_eq!(saved_theme(cx).as_deref(), Some("neumorphism"));
        });
    }

    #[gpui::test]
    fn test_toggle_theme_cycles(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(ThemeName::Dark);

            cx.toggle_theme();
            assert_eq!(cx.get_theme(), ThemeName::Neumorphism);

            cx.toggle_theme();
            assert_eq!(cx.get_theme(), ThemeName::Dark);
            assert_eq!(saved_theme(cx).as_deref(), Some("dark"));
        });
    }

    #[gpui::test]
    fn test_set_theme_by_name_falls_back(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme_by_name("neumorphism");
            assert_eq!(cx.get_theme(), ThemeName::Neumorphism);

            cx.set_theme_by_name("matrix");
            assert_eq!(cx.get_theme(), ThemeName::Dark);
            assert_eq!(saved_theme(cx).as_deref(), Some("dark"));
        });
    }

    #[gpui::test]
    fn test_init_theme_restores_saved(cx: &mut TestAppContext) {
        cx.update(|cx| {
            use_preference_store(
                cx,
                MemoryPreferenceStore::new().with_value(THEME_STORAGE_KEY, "neumorphism"),
            );
            init(cx);

            assert_eq!(cx.get_theme(), ThemeName::Neumorphism);
        });
    }

    #[gpui::test]
    fn test_init_theme_ignores_invalid_saved(cx: &mut TestAppContext) {
        cx.update(|cx| {
            use_preference_store(
                cx,
                MemoryPreferenceStore::new().with_value(THEME_STORAGE_KEY, "white"),
            );
            cx.init_theme();

            assert_eq!(cx.get_theme(), ThemeName::Dark);
            assert_eq!(saved_theme(cx).as_deref(), Some("dark"));
        });
    }

    #[gpui::test]
    fn test_init_theme_survives_unreadable_store(cx: &mut TestAppContext) {
        let dir = std::env::temp_dir().join(format!("ares_ui-theme-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        cx.update(|cx| {
            use_preference_store(cx, FilePreferenceStore::new(&path));
            cx.init_theme();

            assert_eq!(cx.get_theme(), ThemeName::Dark);
            assert_eq!(saved_theme(cx).as_deref(), Some("dark"));
        });

        std::fs::remove_file(&path).unwrap();
    }

    #[gpui::test]
    fn test_theme_changes_notify_observers(cx: &mut TestAppContext) {
        let change_count = Rc::new(Cell::new(0));

        let _subscription = cx.update(|cx| {
            let change_count = change_count.clone();
            cx.observe_global::<ActiveTheme>(move |_cx| {
                change_count.set(change_count.get() + 1);
            })
        });

        cx.update(|cx| cx.toggle_theme());
        assert_eq!(change_count.get(), 1);

        cx.update(|cx| cx.set_theme(ThemeName::Dark));
        assert_eq!(change_count.get(), 2);
    }
}
