//! Fixed-position contact shortcuts.

use dioxus::prelude::*;

use crate::core::config::{tel_url, whatsapp_url, CONTACT_PHONE_DISPLAY};
use crate::t;

#[component]
pub fn WhatsAppLink(#[props(default = "whatsapp-float".to_string(), into)] class: String) -> Element {
    let href = whatsapp_url();
    let label = t!("whatsapp-label");

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            aria_label: "{label}",
            onclick: move |_| tracing::info!("[contact] whatsapp link opened"),
            span { class: "whatsapp-icon", aria_hidden: "true" }
            span { class: "visually-hidden", "{label}" }
        }
    }
}

/// Always-visible emergency call button.
#[component]
pub fn EmergencyFloat() -> Element {
    let href = tel_url();

    rsx! {
        a {
            class: "emergency-float",
            href: "{href}",
            onclick: move |_| tracing::info!("[contact] emergency call started"),
            span { class: "emergency-float__label", {t!("emergency-label")} }
            span { class: "emergency-float__number", "{CONTACT_PHONE_DISPLAY}" }
        }
    }
}
