use std::rc::Rc;

use crate::components::drawer::{DrawerEvent, DrawerState};
use crate::components::theme::ThemeToggle;
use crate::core::config::{COMPANY_NAME, HEADER_SHRINK_SCROLL_PX};
use crate::core::platform::{self, WindowListener};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use futures::StreamExt;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know the platform's `Route` enum.
///
/// Each function receives the localized label and the navbar's click handler,
/// and must return a link that shows exactly that label and forwards its
/// clicks to the handler (so following a link closes the mobile drawer):
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label, on_click| rsx!( Link { class: "nav-link", to: Route::Home {}, onclick: on_click, "{label}" } ),
///     // ...
/// });
/// ```
///
/// Without a registered builder the navbar falls back to its `children`.
pub struct NavBuilder {
    pub home: NavLinkFn,
    pub about: NavLinkFn,
    pub services: NavLinkFn,
    pub capabilities: NavLinkFn,
    pub contact: NavLinkFn,
}

pub type NavLinkFn = fn(label: &str, on_click: EventHandler<MouseEvent>) -> Element;

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum NavEvent {
    Drawer(DrawerEvent),
    Scrolled(f64),
}

#[component]
pub fn SiteNavbar(children: Element) -> Element {
    i18n::init();

    let mut drawer = use_signal(|| DrawerState::CLOSED);
    let mut scrolled = use_signal(|| false);

    // Window listeners fire outside the component scope; every state change is
    // routed through this coroutine.
    let events = use_coroutine(move |mut rx: UnboundedReceiver<NavEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                NavEvent::Drawer(event) => {
                    let current = *drawer.peek();
                    let next = current.apply(event);
                    if next != current {
                        tracing::debug!("[nav] drawer {event:?} -> open={}", next.open);
                        platform::set_scroll_locked(next.locks_scroll());
                        drawer.set(next);
                    }
                }
                NavEvent::Scrolled(y) => {
                    let compact = y > HEADER_SHRINK_SCROLL_PX;
                    if *scrolled.peek() != compact {
                        scrolled.set(compact);
                    }
                }
            }
        }
    });

    let _listeners = use_hook(move || {
        let tx = events.tx();
        let on_escape = {
            let tx = tx.clone();
            WindowListener::on_key(move |key| {
                if key == "Escape" {
                    let _ = tx.unbounded_send(NavEvent::Drawer(DrawerEvent::Escape));
                }
            })
        };
        let on_resize = {
            let tx = tx.clone();
            WindowListener::on("resize", move || {
                let viewport_width = platform::viewport_width();
                let _ = tx.unbounded_send(NavEvent::Drawer(DrawerEvent::Resize { viewport_width }));
            })
        };
        let on_scroll = WindowListener::on("scroll", move || {
            let _ = tx.unbounded_send(NavEvent::Scrolled(platform::scroll_y()));
        });
        Rc::new([on_escape, on_resize, on_scroll])
    });

    use_drop(|| platform::set_scroll_locked(false));

    // Only link clicks count; clicks on the list's padding leave the drawer open.
    let on_link_click = EventHandler::new(move |_: MouseEvent| {
        let viewport_width = platform::viewport_width();
        events.send(NavEvent::Drawer(DrawerEvent::LinkClick { viewport_width }));
    });

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let items = [
            (b.home)(&t!("nav-home"), on_link_click),
            (b.about)(&t!("nav-about"), on_link_click),
            (b.services)(&t!("nav-services"), on_link_click),
            (b.capabilities)(&t!("nav-capabilities"), on_link_click),
            (b.contact)(&t!("nav-contact"), on_link_click),
        ];
        rsx! {
            for item in items {
                li { {item} }
            }
        }
    });

    let state = drawer();
    let active = state.active_class();
    let header_class = if scrolled() { "scrolled" } else { "" };
    let toggle_label = if state.open {
        t!("nav-close-menu")
    } else {
        t!("nav-open-menu")
    };

    rsx! {
        header { id: "header", class: "site-header {header_class}",
            nav { class: "navbar container",
                a { class: "logo", href: "/",
                    span { class: "logo-mark", aria_hidden: "true", "L" }
                    span { class: "logo-text", "{COMPANY_NAME}" }
                }

                ul { id: "nav-links", class: "nav-links {active}",
                    if let Some(nav) = internal_nav {
                        {nav}
                    } else {
                        {children}
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}

                    button {
                        r#type: "button",
                        class: "hamburger {active}",
                        aria_label: "{toggle_label}",
                        aria_controls: "nav-links",
                        aria_expanded: state.aria_expanded(),
                        onclick: move |_| events.send(NavEvent::Drawer(DrawerEvent::Toggle)),
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
        div {
            class: "nav-backdrop {active}",
            aria_hidden: "true",
            onclick: move |_| events.send(NavEvent::Drawer(DrawerEvent::BackdropClick)),
        }
    }
}
