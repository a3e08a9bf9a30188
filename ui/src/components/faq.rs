//! FAQ accordion: at most one answer open at a time.

use dioxus::prelude::*;

use crate::effects::{Reveal, RevealConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Clicking an open panel closes it; clicking a closed one opens it and
    /// closes whichever was open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[component]
pub fn FaqAccordion(entries: Vec<FaqEntry>) -> Element {
    let mut accordion = use_signal(Accordion::default);

    rsx! {
        div { class: "faq-list",
            for (index, entry) in entries.into_iter().enumerate() {
                Reveal { key: "{index}", config: RevealConfig::PAGE,
                    div {
                        class: if accordion.read().is_open(index) { "faq-item active" } else { "faq-item" },
                        button {
                            r#type: "button",
                            class: "faq-question",
                            aria_expanded: if accordion.read().is_open(index) { "true" } else { "false" },
                            onclick: move |_| accordion.with_mut(|a| a.toggle(index)),
                            span { "{entry.question}" }
                            span { class: "faq-toggle", aria_hidden: "true", "+" }
                        }
                        div { class: "faq-answer",
                            p { "{entry.answer}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_b_closes_a() {
        let mut accordion = Accordion::default();
        accordion.toggle(0);
        assert!(accordion.is_open(0));
        accordion.toggle(2);
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(0));
        assert_eq!(accordion.open_panel(), Some(2));
    }

    #[test]
    fn clicking_open_panel_closes_it() {
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion.open_panel(), None);
    }

    #[test]
    fn never_more_than_one_open() {
        let mut accordion = Accordion::default();
        for click in [3usize, 1, 1, 4, 0, 0, 0, 2, 3, 3] {
            accordion.toggle(click);
            let open = (0..5).filter(|i| accordion.is_open(*i)).count();
            assert!(open <= 1);
        }
    }
}
