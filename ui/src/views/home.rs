use dioxus::prelude::*;

use crate::components::{FeatureTab, FeatureTabs, LoadingScreen, WhatsAppLink};
use crate::effects::{
    AnchorLink, AnimatedCounter, CounterTiming, ParticleConfig, ParticleField, Reveal,
    RevealConfig,
};
use crate::t;

struct Highlight {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🛡",
        title: "Armed Response",
        body: "Rapid-reaction officers dispatched around the clock from strategically placed vehicles.",
    },
    Highlight {
        icon: "👮",
        title: "Guarding Services",
        body: "Grade-certified guards for residential estates, retail and industrial sites.",
    },
    Highlight {
        icon: "📹",
        title: "CCTV Surveillance",
        body: "Monitored camera networks with analytics and off-site recording.",
    },
    Highlight {
        icon: "🚨",
        title: "Alarm Systems",
        body: "Installation, monitoring and maintenance of wired and wireless alarms.",
    },
];

const STATS: &[(u64, &str, &str)] = &[
    (500, "+", "Clients protected"),
    (15, "", "Years of service"),
    (24, "/7", "Control room"),
    (98, "%", "Client retention"),
];

fn tech_tabs() -> Vec<FeatureTab> {
    [
        (
            "Live control room",
            "Every alarm signal and camera event lands in a staffed control room that dispatches the nearest vehicle.",
        ),
        (
            "Vehicle tracking",
            "Response vehicles are tracked in real time so dispatchers always send the closest unit.",
        ),
        (
            "Smart analytics",
            "Camera analytics flag loitering and perimeter breaches before an incident escalates.",
        ),
    ]
    .into_iter()
    .map(|(title, body)| FeatureTab {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

#[component]
pub fn Home() -> Element {
    rsx! {
        LoadingScreen {}

        section { class: "hero", id: "home",
            ParticleField { config: ParticleConfig::HOME }
            div { class: "hero-content container",
                h1 { {t!("home-title")} }
                p { class: "hero-subtitle", {t!("home-tagline")} }
                div { class: "hero-actions",
                    a { class: "btn btn-primary", href: "/contact", {t!("home-cta-quote")} }
                    AnchorLink { target: "highlights", class: "btn btn-outline", {t!("home-cta-explore")} }
                }
            }
        }

        section { class: "stats", id: "stats",
            div { class: "container stats-grid",
                for (target, suffix, label) in STATS.iter().copied() {
                    Reveal { key: "{label}", config: RevealConfig::HOME, class: "stat-card",
                        AnimatedCounter {
                            target,
                            suffix: suffix.to_string(),
                            timing: CounterTiming::FRAME_DRIVEN,
                        }
                        p { class: "stat-label", "{label}" }
                    }
                }
            }
        }

        section { class: "highlights", id: "highlights",
            div { class: "container",
                h2 { class: "section-title", {t!("home-services-heading")} }
                div { class: "services-grid",
                    for item in HIGHLIGHTS {
                        Reveal { key: "{item.title}", config: RevealConfig::HOME, class: "service-card",
                            div { class: "service-icon", aria_hidden: "true", "{item.icon}" }
                            h3 { "{item.title}" }
                            p { "{item.body}" }
                        }
                    }
                }
                a { class: "btn btn-outline", href: "/services", {t!("home-services-more")} }
            }
        }

        section { class: "technology", id: "technology",
            div { class: "container",
                h2 { class: "section-title", {t!("home-tech-heading")} }
                Reveal { config: RevealConfig::HOME,
                    FeatureTabs { tabs: tech_tabs() }
                }
            }
        }

        WhatsAppLink {}
    }
}
