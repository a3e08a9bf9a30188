//! Short-lived highlight classes for click feedback.

use dioxus::prelude::*;

use crate::core::timing::sleep_ms;

/// A flag that turns itself off `duration_ms` after being triggered.
/// Overlapping triggers simply extend the highlight.
#[derive(Clone, Copy, PartialEq)]
pub struct Pulse {
    active: Signal<bool>,
    generation: Signal<u64>,
    duration_ms: u64,
}

pub fn use_pulse(duration_ms: u64) -> Pulse {
    Pulse {
        active: use_signal(|| false),
        generation: use_signal(|| 0),
        duration_ms,
    }
}

impl Pulse {
    pub fn trigger(&self) {
        let mut active = self.active;
        let mut generation = self.generation;
        let duration_ms = self.duration_ms;
        let current = *generation.peek() + 1;
        generation.set(current);
        active.set(true);
        spawn(async move {
            sleep_ms(duration_ms).await;
            if *generation.peek() == current {
                active.set(false);
            }
        });
    }

    pub fn is_active(&self) -> bool {
        (self.active)()
    }

    /// `class` while active, empty otherwise.
    pub fn class(&self, class: &'static str) -> &'static str {
        if self.is_active() {
            class
        } else {
            ""
        }
    }
}
