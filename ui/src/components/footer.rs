use dioxus::prelude::*;

use crate::core::config::{mailto_url, tel_url, COMPANY_NAME, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY};
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let mail = mailto_url();
    let tel = tel_url();
    let year = time::OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                div { class: "footer-brand",
                    h3 { "{COMPANY_NAME}" }
                    p { {t!("footer-tagline")} }
                }
                div { class: "footer-contact",
                    h4 { {t!("footer-contact-heading")} }
                    a { href: "{tel}", "{CONTACT_PHONE_DISPLAY}" }
                    a { href: "{mail}", "{CONTACT_EMAIL}" }
                }
            }
            p { class: "footer-legal", {t!("footer-rights", year = year)} }
        }
    }
}
