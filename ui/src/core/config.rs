//! Site-wide constants: breakpoints, storage keys, contact details and timings.

/// Viewport width (px) at and below which the navigation collapses into the drawer.
pub const DRAWER_BREAKPOINT_PX: f64 = 1024.0;

/// `scrollY` past which the header switches to its compact `scrolled` style.
pub const HEADER_SHRINK_SCROLL_PX: f64 = 100.0;

/// Fallback header height when the header has not been measured yet.
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 88.0;

pub const DRAFT_STORAGE_KEY: &str = "contactFormData";
pub const THEME_STORAGE_KEY: &str = "theme";

pub const COMPANY_NAME: &str = "Leano Security Services";
pub const CONTACT_EMAIL: &str = "info@leanosecurity.co.za";
pub const CONTACT_PHONE_DISPLAY: &str = "068 379 4897";
/// International form without the leading `+`, as `wa.me` expects.
pub const WHATSAPP_NUMBER: &str = "27683794897";

/// Loading screen: delay after load before fading, then time until removal.
pub const LOADER_FADE_DELAY_MS: u64 = 800;
pub const LOADER_REMOVE_DELAY_MS: u64 = 500;

/// Scroll-spy debounce for the services page.
pub const SCROLL_SPY_DEBOUNCE_MS: u64 = 100;
/// Extra space kept above a section when the scroll-spy decides which one is current.
pub const SCROLL_SPY_LEAD_PX: f64 = 100.0;

/// Delay of the simulated mail transport.
pub const SIMULATED_SEND_DELAY_MS: u64 = 1000;

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{WHATSAPP_NUMBER}")
}

pub fn mailto_url() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

pub fn tel_url() -> String {
    format!("tel:+{WHATSAPP_NUMBER}")
}
