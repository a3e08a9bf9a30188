use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::core::config::SCROLL_SPY_DEBOUNCE_MS;
use crate::core::platform::{self, WindowListener};
use crate::core::timing::{sleep_ms, Debounce};
use crate::effects::scroll::{active_section, scroll_to_anchor};
use crate::effects::{use_pulse, ParticleConfig, ParticleField, Reveal, RevealConfig, RevealStyle};
use crate::t;

/// Extra gap kept above a service detail when jumping to it.
const DETAIL_SCROLL_GAP_PX: f64 = 20.0;
const DETAIL_HIGHLIGHT_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ServiceDetail {
    id: &'static str,
    icon: &'static str,
    title: &'static str,
    summary: &'static str,
    points: &'static [&'static str],
}

const DETAILS: &[ServiceDetail] = &[
    ServiceDetail {
        id: "armed-response",
        icon: "🛡",
        title: "Armed Response",
        summary: "Tactical officers on standby around the clock, linked to our control room.",
        points: &[
            "Average response under 8 minutes",
            "Marked, tracked vehicles",
            "Incident reports after every call-out",
        ],
    },
    ServiceDetail {
        id: "guarding",
        icon: "👮",
        title: "Guarding Services",
        summary: "PSIRA-registered guards for homes, estates, retail and industrial sites.",
        points: &["Access logging", "Patrol verification", "Supervisor site visits"],
    },
    ServiceDetail {
        id: "cctv",
        icon: "📹",
        title: "CCTV Surveillance",
        summary: "Camera design, installation and off-site monitoring.",
        points: &["Line-crossing analytics", "Remote playback", "Cloud retention"],
    },
    ServiceDetail {
        id: "alarms",
        icon: "🚨",
        title: "Alarm Systems",
        summary: "Intruder, panic and perimeter alarms with 24-hour monitoring.",
        points: &["Wireless and wired panels", "Panic buttons", "Battery backup"],
    },
    ServiceDetail {
        id: "access-control",
        icon: "🔑",
        title: "Access Control",
        summary: "Biometric and tag-based access for offices and estates.",
        points: &["Visitor management", "Audit trails", "Boom and gate automation"],
    },
];

const DETAIL_IDS: &[&str] = &["armed-response", "guarding", "cctv", "alarms", "access-control"];

const PROCESS: &[(&str, &str)] = &[
    ("Consultation", "We listen to your concerns and walk the site with you."),
    ("Risk assessment", "A written assessment of vulnerabilities and priorities."),
    ("Tailored plan", "A proposal matched to your property and budget."),
    ("Deployment", "Installation and officer deployment on an agreed date."),
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Package {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PACKAGES: &[Package] = &[
    Package {
        name: "Residential",
        price: "From R450/month",
        features: &["Armed response", "Alarm monitoring", "Panic button"],
        featured: false,
    },
    Package {
        name: "Business",
        price: "From R1 200/month",
        features: &["Armed response", "CCTV monitoring", "Access control", "Monthly report"],
        featured: true,
    },
    Package {
        name: "Estate",
        price: "Custom quote",
        features: &["On-site guarding", "Gate access control", "Perimeter analytics"],
        featured: false,
    },
];

#[component]
fn ServiceCard(detail: ServiceDetail) -> Element {
    let pulse = use_pulse(150);
    let pressed = pulse.class("pressed");

    rsx! {
        Reveal { config: RevealConfig::PAGE,
            div { class: "service-card {pressed}", onclick: move |_| pulse.trigger(),
                div { class: "service-icon", aria_hidden: "true", "{detail.icon}" }
                h3 { "{detail.title}" }
                p { "{detail.summary}" }
            }
        }
    }
}

#[component]
fn PackageCard(index: usize, package: Package) -> Element {
    let pulse = use_pulse(200);
    let pressed = pulse.class("pressed");
    let featured = if package.featured { "featured" } else { "" };

    rsx! {
        Reveal {
            config: RevealConfig::PAGE,
            style: RevealStyle::staggered(index, 200),
            class: "package-card {featured} {pressed}",
            h3 { "{package.name}" }
            p { class: "package-price", "{package.price}" }
            ul { class: "package-features",
                for feature in package.features.iter() {
                    li { key: "{feature}", class: "feature", "{feature}" }
                }
            }
            a {
                class: "btn package-cta",
                href: "/contact",
                onclick: move |evt| {
                    evt.stop_propagation();
                    pulse.trigger();
                },
                {t!("services-package-cta")}
            }
        }
    }
}

/// Track which service detail is in view, re-evaluated at most once per
/// debounce window after scrolling stops.
fn use_scroll_spy(ids: &'static [&'static str]) -> Signal<Option<String>> {
    let mut active = use_signal(|| None::<String>);

    let spy = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        let debounce = Rc::new(Debounce::new());
        while rx.next().await.is_some() {
            let generation = debounce.bump();
            let debounce = debounce.clone();
            spawn(async move {
                sleep_ms(SCROLL_SPY_DEBOUNCE_MS).await;
                if !debounce.is_current(generation) {
                    return;
                }
                let sections = platform::section_bounds(ids);
                let current =
                    active_section(platform::scroll_y(), platform::header_height(), &sections)
                        .map(str::to_string);
                if *active.peek() != current {
                    active.set(current);
                }
            });
        }
    });

    use_hook(move || {
        let tx = spy.tx();
        Rc::new(WindowListener::on("scroll", move || {
            let _ = tx.unbounded_send(());
        }))
    });

    active
}

#[component]
pub fn Services() -> Element {
    let active = use_scroll_spy(DETAIL_IDS);
    let mut highlighted = use_signal(|| None::<&'static str>);

    let mut jump_to = move |id: &'static str| {
        if !scroll_to_anchor(id, DETAIL_SCROLL_GAP_PX) {
            return;
        }
        highlighted.set(Some(id));
        spawn(async move {
            sleep_ms(DETAIL_HIGHLIGHT_MS).await;
            if *highlighted.peek() == Some(id) {
                highlighted.set(None);
            }
        });
    };

    rsx! {
        section { class: "page-hero services-hero",
            ParticleField { config: ParticleConfig::SERVICES }
            div { class: "container",
                h1 { {t!("services-title")} }
                p { class: "hero-subtitle", {t!("services-intro")} }
            }
        }

        section { class: "services-overview",
            div { class: "container services-grid",
                for detail in DETAILS.iter().copied() {
                    ServiceCard { key: "{detail.id}", detail }
                }
            }
        }

        section { class: "service-details",
            div { class: "container service-details-layout",
                nav { class: "service-links", aria_label: "Service details",
                    for detail in DETAILS.iter().copied() {
                        a {
                            key: "{detail.id}",
                            class: if active().as_deref() == Some(detail.id) { "service-link active" } else { "service-link" },
                            href: "#{detail.id}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                jump_to(detail.id);
                            },
                            "{detail.title}"
                        }
                    }
                }
                div { class: "service-detail-list",
                    for detail in DETAILS.iter().copied() {
                        article {
                            key: "{detail.id}",
                            id: "{detail.id}",
                            class: if highlighted() == Some(detail.id) { "service-detail highlighted" } else { "service-detail" },
                            Reveal { config: RevealConfig::PAGE, class: "detail-header",
                                h2 { "{detail.icon} {detail.title}" }
                            }
                            p { "{detail.summary}" }
                            ul {
                                for point in detail.points.iter() {
                                    li { key: "{point}", "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "process-section",
            div { class: "container",
                h2 { class: "section-title", {t!("services-process-heading")} }
                div { class: "process-steps",
                    for (index, (title, body)) in PROCESS.iter().copied().enumerate() {
                        Reveal {
                            key: "{title}",
                            config: RevealConfig::PAGE,
                            style: RevealStyle::staggered(index, 200),
                            class: "process-step",
                            span { class: "step-number", {(index + 1).to_string()} }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }

        section { class: "packages-section",
            div { class: "container",
                h2 { class: "section-title", {t!("services-packages-heading")} }
                div { class: "packages-grid",
                    for (index, package) in PACKAGES.iter().copied().enumerate() {
                        PackageCard { key: "{package.name}", index, package }
                    }
                }
            }
        }
    }
}
