//! Localization for `leano-ui`.
//!
//! Messages live in `i18n/<lang>/leano-ui.ftl` and are embedded at compile
//! time with `rust-embed`; `i18n-embed` picks the best bundle for the
//! visitor's language list and `fluent` formats the messages.
//!
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("nav-home");
//! ```
//!
//! `en-US` is the fallback and reference bundle. Adding a locale means copying
//! that file, translating each value, and keeping IDs and placeholders intact;
//! `tests::i18n_completeness` checks the result.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Look up a message through the shared loader:
/// `t!("nav-home")` or `t!("footer-rights", year = 2025)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the bundle filename (`i18n/en-US/leano-ui.ftl`).
const DOMAIN: &str = "leano-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_bundle_is_embedded() {
        assert!(Localizations::get("en-US/leano-ui.ftl").is_some());
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Home");
    }

    #[test]
    fn arguments_are_interpolated() {
        init();
        let year = 2031;
        assert!(crate::t!("footer-rights", year = year).contains("2031"));
    }
}
