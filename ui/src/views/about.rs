use dioxus::prelude::*;

use crate::effects::counter::CounterTarget;
use crate::effects::{use_pulse, AnimatedCounter, CounterTiming, Reveal, RevealConfig, RevealStyle};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Milestone {
    year: &'static str,
    title: &'static str,
    body: &'static str,
}

const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2009",
        title: "Founded in Pretoria",
        body: "Started as a two-vehicle armed response operation serving local homeowners.",
    },
    Milestone {
        year: "2013",
        title: "Control room opens",
        body: "A 24-hour monitoring centre brought alarms and dispatch under one roof.",
    },
    Milestone {
        year: "2018",
        title: "Commercial guarding",
        body: "Expanded into industrial, retail and estate guarding contracts.",
    },
    Milestone {
        year: "2023",
        title: "Smart surveillance",
        body: "Launched analytics-driven CCTV monitoring for business clients.",
    },
];

/// Statistic captions as printed; numeric prefixes animate, suffixes stay.
const STATS: &[(&str, &str)] = &[
    ("500+", "Clients served"),
    ("120+", "Trained officers"),
    ("15+", "Years in operation"),
    ("24/7", "Control room cover"),
];

const VALUES: &[(&str, &str)] = &[
    ("Integrity", "We do what we say, and we report honestly on every incident."),
    ("Vigilance", "Prevention first: patrols, analytics and alert officers."),
    ("Community", "Local teams who know the streets they protect."),
];

#[component]
fn TimelineEntry(index: usize, milestone: Milestone) -> Element {
    let pulse = use_pulse(300);
    let pulsed = pulse.class("pulsed");

    rsx! {
        Reveal {
            config: RevealConfig::PAGE,
            style: RevealStyle::alternating(index),
            class: "timeline-item",
            div {
                class: "timeline-content {pulsed}",
                onclick: move |_| pulse.trigger(),
                span { class: "timeline-year", "{milestone.year}" }
                h3 { "{milestone.title}" }
                p { "{milestone.body}" }
            }
        }
    }
}

#[component]
fn StatFigure(text: &'static str, label: &'static str) -> Element {
    rsx! {
        Reveal { config: RevealConfig::PAGE, class: "leadership-stat",
            {match CounterTarget::parse(text) {
                Some(target) => rsx! {
                    AnimatedCounter {
                        target: target.value,
                        suffix: target.suffix,
                        timing: CounterTiming::STEPPED,
                        class: "stat-number",
                    }
                },
                // Captions without a leading number are shown as-is.
                None => rsx! { span { class: "stat-number", "{text}" } },
            }}
            p { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page-hero",
            div { class: "container",
                h1 { {t!("about-title")} }
                p { class: "hero-subtitle", {t!("about-intro")} }
            }
        }

        section { class: "about-stats",
            div { class: "container stats-grid",
                for (text, label) in STATS.iter().copied() {
                    StatFigure { key: "{label}", text, label }
                }
            }
        }

        section { class: "timeline-section",
            div { class: "container",
                h2 { class: "section-title", {t!("about-timeline-heading")} }
                div { class: "timeline",
                    for (index, milestone) in MILESTONES.iter().copied().enumerate() {
                        TimelineEntry { key: "{milestone.year}", index, milestone }
                    }
                }
            }
        }

        section { class: "values-section",
            div { class: "container values-grid",
                for (title, body) in VALUES.iter().copied() {
                    Reveal { key: "{title}", config: RevealConfig::PAGE, class: "value-card",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
