//! Anchor scrolling and the services scroll-spy.

use dioxus::prelude::*;

use crate::core::config::SCROLL_SPY_LEAD_PX;
use crate::core::platform::{self, SectionBounds};

/// Document offset to scroll to so the target clears the fixed header.
pub fn anchor_offset(target_top: f64, header_height: f64, extra_px: f64) -> f64 {
    (target_top - header_height - extra_px).max(0.0)
}

/// Smooth-scroll to the element with `id` (a leading `#` is accepted).
/// Returns `false` for an empty anchor or a missing target.
pub fn scroll_to_anchor(id: &str, extra_px: f64) -> bool {
    let id = id.trim_start_matches('#');
    if id.is_empty() {
        return false;
    }
    match platform::element_top(id) {
        Some(top) => {
            platform::smooth_scroll_to(anchor_offset(top, platform::header_height(), extra_px));
            true
        }
        None => false,
    }
}

/// The section whose window `[top - header - lead, ... + height)` contains
/// `scroll_y`. Later sections win when windows overlap.
pub fn active_section(
    scroll_y: f64,
    header_height: f64,
    sections: &[SectionBounds],
) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let start = section.top - header_height - SCROLL_SPY_LEAD_PX;
            let end = start + section.height;
            scroll_y >= start && scroll_y < end
        })
        .last()
        .map(|section| section.id.as_str())
}

/// In-page link that scrolls smoothly to `target`, clearing the fixed header.
#[component]
pub fn AnchorLink(
    target: &'static str,
    #[props(default, into)] class: String,
    #[props(default)] extra_px: f64,
    children: Element,
) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "#{target}",
            onclick: move |evt| {
                evt.prevent_default();
                if !scroll_to_anchor(target, extra_px) {
                    tracing::debug!("[scroll] no anchor target #{target}");
                }
            },
            {children}
        }
    }
}
