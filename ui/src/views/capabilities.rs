use std::rc::Rc;

use dioxus::prelude::*;

use crate::effects::connectors::{measure, ConnectorLine};
use crate::effects::{use_pulse, ParticleConfig, ParticleField, Reveal, RevealConfig, RevealStyle};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Capability {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const CAPABILITIES: &[Capability] = &[
    Capability {
        icon: "🖥",
        title: "24/7 Control Room",
        body: "Operators monitor alarms, cameras and panic signals without a break in cover.",
    },
    Capability {
        icon: "🚓",
        title: "Rapid Response Fleet",
        body: "GPS-tracked vehicles positioned for the shortest route to every client.",
    },
    Capability {
        icon: "📡",
        title: "Remote Monitoring",
        body: "Off-site video verification before officers are dispatched.",
    },
    Capability {
        icon: "🎓",
        title: "Accredited Training",
        body: "Officers complete ongoing tactical, first-aid and customer-care training.",
    },
];

const FEATURES: &[&str] = &[
    "Alarm signal verification",
    "Automatic number plate recognition",
    "Perimeter line-crossing alerts",
    "Mobile guard tour tracking",
    "Client incident portal",
    "Monthly risk reports",
];

/// Systems arranged around the integration hub.
const NODES: &[(&str, &str)] = &[
    ("📹", "CCTV"),
    ("🚨", "Alarms"),
    ("🔑", "Access"),
    ("🚓", "Response"),
    ("📱", "Mobile app"),
    ("🛰", "Tracking"),
];

#[component]
fn CapabilityCard(capability: Capability) -> Element {
    let glow = use_pulse(300);
    let glowing = glow.class("glow");

    rsx! {
        Reveal { config: RevealConfig::PAGE,
            div { class: "capability-card {glowing}", onclick: move |_| glow.trigger(),
                div { class: "capability-icon", aria_hidden: "true", "{capability.icon}" }
                h3 { "{capability.title}" }
                p { "{capability.body}" }
            }
        }
    }
}

/// Hub-and-spoke diagram. Hovering a node draws a line from it to the hub.
#[component]
fn IntegrationVisual() -> Element {
    let mut container = use_signal(|| None::<Rc<MountedData>>);
    let mut hub = use_signal(|| None::<Rc<MountedData>>);
    let mut hovered = use_signal(|| None::<usize>);
    let mut line = use_signal(|| None::<ConnectorLine>);

    let mut connect = move |index: usize, node: Rc<MountedData>| {
        hovered.set(Some(index));
        let (Some(container_el), Some(hub_el)) = (container(), hub()) else {
            return;
        };
        spawn(async move {
            let (Some(node_box), Some(hub_box), Some(container_box)) = (
                measure(&node).await,
                measure(&hub_el).await,
                measure(&container_el).await,
            ) else {
                return;
            };
            // The pointer may have left while we were measuring.
            if *hovered.peek() == Some(index) {
                line.set(Some(ConnectorLine::between(node_box, hub_box, container_box)));
            }
        });
    };

    rsx! {
        div {
            class: "integration-visual",
            onmounted: move |evt| container.set(Some(evt.data())),
            div {
                class: "center-circle",
                onmounted: move |evt| hub.set(Some(evt.data())),
                span { {t!("capabilities-hub-label")} }
            }
            for (index, (icon, label)) in NODES.iter().copied().enumerate() {
                NodeBadge {
                    key: "{label}",
                    index,
                    icon,
                    label,
                    on_enter: move |node: Rc<MountedData>| connect(index, node),
                    on_leave: move |_| {
                        hovered.set(None);
                        line.set(None);
                    },
                }
            }
            if let Some(current) = line() {
                div { class: "connection-line", style: current.style() }
            }
        }
    }
}

#[component]
fn NodeBadge(
    index: usize,
    icon: &'static str,
    label: &'static str,
    on_enter: EventHandler<Rc<MountedData>>,
    on_leave: EventHandler<()>,
) -> Element {
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);

    rsx! {
        div {
            class: "node node-{index}",
            onmounted: move |evt| mounted.set(Some(evt.data())),
            onmouseenter: move |_| {
                if let Some(node) = mounted() {
                    on_enter.call(node);
                }
            },
            onmouseleave: move |_| on_leave.call(()),
            div { class: "node-icon", aria_hidden: "true", "{icon}" }
            span { class: "node-label", "{label}" }
        }
    }
}

#[component]
pub fn Capabilities() -> Element {
    rsx! {
        section { class: "page-hero capabilities-hero",
            ParticleField { config: ParticleConfig::CAPABILITIES }
            div { class: "container",
                h1 { {t!("capabilities-title")} }
                p { class: "hero-subtitle", {t!("capabilities-intro")} }
            }
        }

        section { class: "capabilities-section",
            div { class: "container capabilities-grid",
                for capability in CAPABILITIES.iter().copied() {
                    CapabilityCard { key: "{capability.title}", capability }
                }
            }
        }

        section { class: "integration-section",
            div { class: "container integration-layout",
                div { class: "integration-copy",
                    h2 { class: "section-title", {t!("capabilities-integration-heading")} }
                    div { class: "feature-list",
                        for (index, feature) in FEATURES.iter().copied().enumerate() {
                            Reveal {
                                key: "{feature}",
                                config: RevealConfig::PAGE,
                                style: RevealStyle::staggered(index, 100),
                                class: "feature-item",
                                "{feature}"
                            }
                        }
                    }
                }
                IntegrationVisual {}
            }
        }
    }
}
