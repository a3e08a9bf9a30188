//! Light/dark theme preference, persisted in local storage and mirrored to
//! `data-theme` on the document root.

use dioxus::prelude::*;

use crate::core::config::THEME_STORAGE_KEY;
use crate::core::platform;
use crate::core::storage::{BrowserStorage, KeyValueStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything but `"dark"` is light.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => Self::parse(&raw),
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("[theme] could not read preference: {err}");
                Self::default()
            }
        }
    }

    pub fn save(self, store: &impl KeyValueStore) {
        if let Err(err) = store.set(THEME_STORAGE_KEY, self.as_str()) {
            tracing::warn!("[theme] could not persist preference: {err}");
        }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_signal(|| Theme::load(&BrowserStorage));

    use_effect(move || {
        platform::apply_document_theme(theme().as_str());
    });

    let label = match theme() {
        Theme::Light => crate::t!("theme-switch-dark"),
        Theme::Dark => crate::t!("theme-switch-light"),
    };

    rsx! {
        button {
            r#type: "button",
            id: "themeToggle",
            class: "theme-toggle",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| {
                let next = theme().toggled();
                next.save(&BrowserStorage);
                theme.set(next);
            },
            span { class: "theme-toggle__icon", aria_hidden: "true",
                if theme() == Theme::Dark { "☀" } else { "☾" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let store = MemoryStore::new();
        let next = Theme::load(&store).toggled();
        next.save(&store);
        assert_eq!(store.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
