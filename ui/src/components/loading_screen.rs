//! Full-screen loader shown while the home page boots.

use dioxus::prelude::*;

use crate::core::config::{COMPANY_NAME, LOADER_FADE_DELAY_MS, LOADER_REMOVE_DELAY_MS};
use crate::core::timing::sleep_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    /// `loaded` class applied; the CSS transition fades it out.
    Fading,
    Hidden,
}

impl LoaderPhase {
    pub fn class(self) -> &'static str {
        match self {
            LoaderPhase::Visible => "loading-screen",
            LoaderPhase::Fading | LoaderPhase::Hidden => "loading-screen loaded",
        }
    }

    pub fn is_rendered(self) -> bool {
        self != LoaderPhase::Hidden
    }

    /// Next phase and how long to wait before entering it.
    pub fn next(self) -> Option<(u64, LoaderPhase)> {
        match self {
            LoaderPhase::Visible => Some((LOADER_FADE_DELAY_MS, LoaderPhase::Fading)),
            LoaderPhase::Fading => Some((LOADER_REMOVE_DELAY_MS, LoaderPhase::Hidden)),
            LoaderPhase::Hidden => None,
        }
    }
}

#[component]
pub fn LoadingScreen() -> Element {
    let mut phase = use_signal(|| LoaderPhase::Visible);

    use_hook(move || {
        spawn(async move {
            loop {
                let step = phase.peek().next();
                let Some((delay, next)) = step else {
                    break;
                };
                sleep_ms(delay).await;
                phase.set(next);
            }
        })
    });

    let current = phase();
    if !current.is_rendered() {
        return rsx! {};
    }

    rsx! {
        div { class: "{current.class()}", aria_hidden: "true",
            div { class: "loader-shield" }
            p { class: "loader-text", "{COMPANY_NAME}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_fade_then_hide() {
        let (first_delay, fading) = LoaderPhase::Visible.next().unwrap();
        assert_eq!((first_delay, fading), (800, LoaderPhase::Fading));
        assert!(fading.class().contains("loaded"));
        let (second_delay, hidden) = fading.next().unwrap();
        assert_eq!((second_delay, hidden), (500, LoaderPhase::Hidden));
        assert!(!hidden.is_rendered());
        assert!(hidden.next().is_none());
    }
}
