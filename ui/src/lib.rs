//! Shared UI crate for the Leano Security Services site: page views, the
//! contact form flow, visual effects and the browser glue they rely on.

pub mod components;
pub mod contact;
pub mod core;
pub mod effects;
pub mod i18n;
pub mod views;

#[cfg(test)]
mod tests;

/// The site theme, embedded so platforms can inline it without an asset pipeline.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
