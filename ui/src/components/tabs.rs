//! Feature tabs on the home page: exactly one tab active at a time.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSet {
    active: usize,
    len: usize,
}

impl TabSet {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.active == index
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTab {
    pub title: String,
    pub body: String,
}

#[component]
pub fn FeatureTabs(tabs: Vec<FeatureTab>) -> Element {
    let len = tabs.len();
    let mut set = use_signal(move || TabSet::new(len));

    rsx! {
        div { class: "tech-features",
            div { class: "tech-feature-list", role: "tablist",
                for (index, tab) in tabs.iter().enumerate() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        role: "tab",
                        class: if set().is_active(index) { "tech-feature active" } else { "tech-feature" },
                        aria_selected: if set().is_active(index) { "true" } else { "false" },
                        onclick: move |_| set.with_mut(|s| s.select(index)),
                        "{tab.title}"
                    }
                }
            }
            if let Some(tab) = tabs.get(set().active()) {
                div { class: "tech-feature-panel", role: "tabpanel", p { "{tab.body}" } }
            }
        }
    }
}
