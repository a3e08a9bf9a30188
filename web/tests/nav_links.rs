//! The navbar closes the mobile drawer only when one of its links is clicked,
//! so every registered link builder must forward its clicks.

const MAIN_RS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs"));

fn link_builders(source: &str) -> Vec<(&str, &str)> {
    source
        .split("\nfn ")
        .skip(1)
        .filter(|chunk| chunk.starts_with("nav_"))
        .map(|chunk| {
            let name = chunk.split('(').next().unwrap_or_default();
            let body = chunk.split("\n}").next().unwrap_or_default();
            (name, body)
        })
        .collect()
}

#[test]
fn every_route_has_a_link_builder() {
    let names: Vec<_> = link_builders(MAIN_RS).into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        ["nav_home", "nav_about", "nav_services", "nav_capabilities", "nav_contact"]
    );
}

#[test]
fn link_builders_forward_clicks_to_the_navbar() {
    for (name, body) in link_builders(MAIN_RS) {
        assert!(
            body.contains("on_click: EventHandler<MouseEvent>"),
            "{name} does not accept the navbar click handler"
        );
        assert!(
            body.contains("onclick: on_click"),
            "{name} drops the navbar click handler"
        );
    }
}
