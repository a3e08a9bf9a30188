use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteFooter, SiteNavbar};
use ui::views::{About, Capabilities, Contact, Home, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/capabilities")]
    Capabilities {},
    #[route("/contact")]
    Contact {},
}

fn nav_home(label: &str, on_click: EventHandler<MouseEvent>) -> Element {
    rsx!(Link {
        class: "nav-link",
        to: Route::Home {},
        onclick: on_click,
        "{label}"
    })
}
fn nav_about(label: &str, on_click: EventHandler<MouseEvent>) -> Element {
    rsx!(Link {
        class: "nav-link",
        to: Route::About {},
        onclick: on_click,
        "{label}"
    })
}
fn nav_services(label: &str, on_click: EventHandler<MouseEvent>) -> Element {
    rsx!(Link {
        class: "nav-link",
        to: Route::Services {},
        onclick: on_click,
        "{label}"
    })
}
fn nav_capabilities(label: &str, on_click: EventHandler<MouseEvent>) -> Element {
    rsx!(Link {
        class: "nav-link",
        to: Route::Capabilities {},
        onclick: on_click,
        "{label}"
    })
}
fn nav_contact(label: &str, on_click: EventHandler<MouseEvent>) -> Element {
    rsx!(Link {
        class: "nav-link",
        to: Route::Contact {},
        onclick: on_click,
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            about: nav_about,
            services: nav_services,
            capabilities: nav_capabilities,
            contact: nav_contact,
        });
    }

    use_hook(|| tracing::info!("[web] {} site started", ui::core::config::COMPANY_NAME));

    rsx! {
        document::Title { "{ui::core::config::COMPANY_NAME}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> {}
    }
}

/// Shared chrome around every page: the navbar above the routed view and the
/// footer below it.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        SiteNavbar {}
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter {}
    }
}
