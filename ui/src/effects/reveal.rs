//! Scroll-triggered reveals. An element starts hidden and transitions in the
//! first time it enters the viewport; the state latches, so leaving the
//! viewport again never hides it.

use dioxus::prelude::*;
use futures::StreamExt;

use crate::core::platform::{self, VisibilityOptions, VisibilityWatch};
use crate::core::timing::sleep_ms;

pub const REVEAL_CLASS: &str = "animate-in";

/// When an element counts as "entered".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Shrinks the viewport from the bottom so elements reveal slightly after
    /// they scroll into view.
    pub bottom_margin_px: u32,
    /// Stop observing after the first entry.
    pub once: bool,
}

impl RevealConfig {
    pub const HOME: Self = Self {
        threshold: 0.1,
        bottom_margin_px: 40,
        once: true,
    };
    pub const PAGE: Self = Self {
        threshold: 0.1,
        bottom_margin_px: 50,
        once: false,
    };
    pub const COUNTER: Self = Self {
        threshold: 0.5,
        bottom_margin_px: 0,
        once: true,
    };

    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            "0px".to_string()
        } else {
            format!("0px 0px -{}px 0px", self.bottom_margin_px)
        }
    }

    pub fn visibility_options(&self) -> VisibilityOptions {
        VisibilityOptions {
            threshold: self.threshold,
            root_margin: self.root_margin(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::PAGE
    }
}

/// How a revealed element makes its entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    FadeUp { offset_px: u32 },
    /// Horizontal slide, used for alternating timeline entries.
    SlideX { from_left: bool },
    /// Fade up after a delay, for sequences that should cascade.
    Staggered { delay_ms: u64 },
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self::FadeUp { offset_px: 30 }
    }
}

impl RevealStyle {
    pub fn alternating(index: usize) -> Self {
        Self::SlideX {
            from_left: index % 2 == 0,
        }
    }

    pub fn staggered(index: usize, step_ms: u64) -> Self {
        Self::Staggered {
            delay_ms: index as u64 * step_ms,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        match self {
            Self::Staggered { delay_ms } => *delay_ms,
            _ => 0,
        }
    }

    fn hidden_transform(&self) -> String {
        match self {
            Self::FadeUp { offset_px } => format!("translateY({offset_px}px)"),
            Self::SlideX { from_left: true } => "translateX(-50px)".to_string(),
            Self::SlideX { from_left: false } => "translateX(50px)".to_string(),
            Self::Staggered { .. } => "translateY(30px)".to_string(),
        }
    }

    /// Inline style for the current state.
    pub fn inline_style(&self, revealed: bool) -> String {
        let (opacity, transform) = if revealed {
            ("1", "none".to_string())
        } else {
            ("0", self.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity 0.6s ease, transform 0.6s ease;"
        )
    }

    /// Classes added once revealed.
    pub fn revealed_class(&self) -> &'static str {
        match self {
            Self::Staggered { .. } => "animate-in animated",
            _ => REVEAL_CLASS,
        }
    }
}

/// Viewport visibility of one mounted element, fed by an intersection
/// observer. Attach it from the element's `onmounted` handler.
#[derive(Clone)]
pub struct InView {
    pub visible: Signal<bool>,
    watch: Signal<Option<VisibilityWatch>>,
    events: Coroutine<bool>,
    config: RevealConfig,
}

pub fn use_in_view(config: RevealConfig) -> InView {
    let mut visible = use_signal(|| false);
    let watch = use_signal(|| None::<VisibilityWatch>);
    let once = config.once;

    // Observer callbacks arrive from outside the component scope; funnel them
    // through a coroutine so signal writes happen on the runtime.
    let events = use_coroutine(move |mut rx: UnboundedReceiver<bool>| async move {
        while let Some(now_visible) = rx.next().await {
            if once && !now_visible {
                continue;
            }
            if *visible.peek() != now_visible {
                visible.set(now_visible);
            }
        }
    });

    InView {
        visible,
        watch,
        events,
        config,
    }
}

impl InView {
    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    pub fn attach(&self, mounted: &MountedData) {
        let tx = self.events.tx();
        let once = self.config.once;
        let handle = platform::watch_visibility(
            mounted,
            &self.config.visibility_options(),
            move |now_visible| {
                let _ = tx.unbounded_send(now_visible);
                !(once && now_visible)
            },
        );
        let mut watch = self.watch;
        watch.set(handle);
    }
}

/// Latching reveal state: once revealed, stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Feed an intersection change; returns `true` exactly when the element
    /// becomes revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Wrap content that should reveal on scroll.
#[component]
pub fn Reveal(
    #[props(default)] config: RevealConfig,
    #[props(default)] style: RevealStyle,
    #[props(default, into)] class: String,
    #[props(default, into)] id: Option<String>,
    children: Element,
) -> Element {
    let in_view = use_in_view(config);
    let visible = in_view.visible;
    let mut state = use_signal(RevealState::default);
    let mut revealed = use_signal(|| false);

    use_effect(move || {
        let entered = state.with_mut(|s| s.observe(visible()));
        if !entered {
            return;
        }
        let delay = style.delay_ms();
        if delay == 0 {
            revealed.set(true);
        } else {
            spawn(async move {
                sleep_ms(delay).await;
                revealed.set(true);
            });
        }
    });

    let is_revealed = revealed();
    let state_class = if is_revealed {
        style.revealed_class()
    } else {
        ""
    };
    let inline = style.inline_style(is_revealed);

    rsx! {
        div {
            id,
            class: "reveal {class} {state_class}",
            style: "{inline}",
            onmounted: move |evt| in_view.attach(&evt.data()),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_shrinks_bottom_edge() {
        assert_eq!(RevealConfig::HOME.root_margin(), "0px 0px -40px 0px");
        assert_eq!(RevealConfig::PAGE.root_margin(), "0px 0px -50px 0px");
        assert_eq!(RevealConfig::COUNTER.root_margin(), "0px");
        assert_eq!(RevealConfig::PAGE.visibility_options().threshold, 0.1);
    }

    #[test]
    fn reveal_latches() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(true));
        assert!(!state.observe(false));
        assert!(state.is_revealed());
    }

    #[test]
    fn timeline_alternates_direction() {
        assert_eq!(
            RevealStyle::alternating(0),
            RevealStyle::SlideX { from_left: true }
        );
        assert_eq!(
            RevealStyle::alternating(3),
            RevealStyle::SlideX { from_left: false }
        );
        assert!(RevealStyle::alternating(0)
            .inline_style(false)
            .contains("translateX(-50px)"));
        assert!(RevealStyle::alternating(1)
            .inline_style(false)
            .contains("translateX(50px)"));
    }

    #[test]
    fn staggered_delays_scale_with_index() {
        let style = RevealStyle::staggered(3, 200);
        assert_eq!(style.delay_ms(), 600);
        assert_eq!(style.revealed_class(), "animate-in animated");
        assert_eq!(RevealStyle::default().delay_ms(), 0);
    }

    #[test]
    fn inline_style_toggles_opacity() {
        let style = RevealStyle::default();
        assert!(style.inline_style(false).starts_with("opacity: 0; transform: translateY(30px)"));
        assert!(style.inline_style(true).starts_with("opacity: 1; transform: none"));
    }
}
