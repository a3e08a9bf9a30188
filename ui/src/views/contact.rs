use dioxus::prelude::*;

use crate::components::{EmergencyFloat, FaqAccordion, FaqEntry, WhatsAppLink};
use crate::contact::ContactFormView;
use crate::core::config::{mailto_url, tel_url, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY};
use crate::effects::{Reveal, RevealConfig};
use crate::t;

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How quickly do your armed response officers arrive?",
            answer: "Our average response time is under eight minutes in covered areas, and every call-out is logged with arrival times.",
        },
        FaqEntry {
            question: "Do you offer month-to-month contracts?",
            answer: "Yes. Residential packages run month to month; commercial contracts are tailored after a site assessment.",
        },
        FaqEntry {
            question: "Can you monitor an alarm system installed by another company?",
            answer: "In most cases yes. A technician checks compatibility and reprograms the panel to report to our control room.",
        },
        FaqEntry {
            question: "Are your guards registered with PSIRA?",
            answer: "Every officer is PSIRA-registered at the grade required for the site, and certificates are available on request.",
        },
        FaqEntry {
            question: "What happens after I submit the contact form?",
            answer: "A consultant contacts you within the time frame you selected to arrange a free risk assessment.",
        },
    ]
}

#[component]
pub fn Contact() -> Element {
    let tel = tel_url();
    let mail = mailto_url();

    rsx! {
        section { class: "page-hero contact-hero",
            div { class: "container",
                h1 { {t!("contact-title")} }
                p { class: "hero-subtitle", {t!("contact-intro")} }
            }
        }

        section { class: "contact-section",
            div { class: "container contact-layout",
                Reveal { config: RevealConfig::PAGE, class: "contact-form-card",
                    h2 { {t!("contact-form-heading")} }
                    ContactFormView {}
                }
                aside { class: "contact-details",
                    Reveal { config: RevealConfig::PAGE, class: "contact-card",
                        h3 { {t!("contact-call-heading")} }
                        a { href: "{tel}", "{CONTACT_PHONE_DISPLAY}" }
                    }
                    Reveal { config: RevealConfig::PAGE, class: "contact-card",
                        h3 { {t!("contact-email-heading")} }
                        a { href: "{mail}", "{CONTACT_EMAIL}" }
                    }
                    Reveal { config: RevealConfig::PAGE, class: "contact-card",
                        h3 { {t!("contact-whatsapp-heading")} }
                        WhatsAppLink { class: "whatsapp-btn" }
                    }
                }
            }
        }

        section { class: "faq-section",
            div { class: "container",
                h2 { class: "section-title", {t!("contact-faq-heading")} }
                FaqAccordion { entries: faq_entries() }
            }
        }

        EmergencyFloat {}
    }
}
