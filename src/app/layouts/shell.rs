//! Application layout shell: collapsible side panel + top bar around the
//! routed page content.

use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::ThemeToggle;
use crate::app::navigation::{NavConfig, NavEntry};
use crate::app::routes::Route;
use crate::shared::hooks::{use_sidebar, use_sidebar_provider, use_theme_provider};
use crate::shared::logging;

/// Route-level wrapper used in `#[layout(...)]`. Loads the bundled stylesheet,
/// installs the shared theme state, reads the current location and nests the
/// routed content inside [`LayoutShell`].
#[component]
pub fn AppShell() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    // Single source of truth for every theme consumer below
    use_theme_provider();

    let route = use_route::<Route>();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        LayoutShell {
            current_page_name: route.page_name().to_string(),
            current_path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

/// Two-region composition: side panel plus main region. `children` is rendered
/// verbatim in the scrollable content container.
///
/// `current_page_name` is accepted for interface parity with the host contract
/// but takes no part in rendering decisions (reserved).
#[component]
pub fn LayoutShell(current_page_name: String, current_path: String, children: Element) -> Element {
    let _ = &current_page_name;

    // Panel starts closed; trigger and backdrop flip it
    let sidebar = use_sidebar_provider();

    rsx! {
        div { class: "c-layout",
            Sidebar { current_path }

            if sidebar.is_open() {
                div {
                    class: "c-layout__backdrop",
                    onclick: move |_| sidebar.close(),
                }
            }

            div { class: "c-layout__main",
                header { class: "c-topbar",
                    SidebarTrigger {}
                    h1 { class: "c-topbar__title", "J.A.R.V.I.S" }
                    div { class: "c-topbar__actions",
                        ThemeToggle {}
                    }
                }

                div { class: "c-layout__content",
                    {children}
                }
            }
        }
    }
}

/// Side panel: brand header, then one navigation group rendered from the
/// injected [`NavConfig`].
#[component]
fn Sidebar(current_path: String) -> Element {
    let sidebar = use_sidebar();
    let config = use_context::<NavConfig>();

    let panel_class = if sidebar.is_open() {
        "c-sidebar c-sidebar--open"
    } else {
        "c-sidebar"
    };

    rsx! {
        aside { class: "{panel_class}",
            div { class: "c-sidebar__header",
                div { class: "c-sidebar__brand", "✨" }
                div {
                    h2 { class: "c-sidebar__title", "J.A.R.V.I.S" }
                    p { class: "c-sidebar__subtitle", "Just A Rather Very Intelligent System" }
                }
            }

            nav { class: "c-sidebar__nav",
                div { class: "c-sidebar__group-label", "Navigation" }
                ul { class: "c-sidebar__menu",
                    for entry in config.entries.iter() {
                        NavItem {
                            key: "{entry.title}",
                            entry: entry.clone(),
                            active: config.strategy.is_active(&current_path, &entry.url),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry, active: bool) -> Element {
    let sidebar = use_sidebar();

    let item_class = if active {
        "c-sidebar__item c-sidebar__item--active"
    } else {
        "c-sidebar__item"
    };
    let url = entry.url.clone();

    rsx! {
        li { class: "c-sidebar__menu-item",
            Link {
                class: "{item_class}",
                to: entry.url.clone(),
                onclick: move |_| {
                    logging::log_navigation(&url);
                    // Collapse the panel after navigating
                    sidebar.close();
                },
                span { class: "c-sidebar__item-icon", "{entry.icon}" }
                span { class: "c-sidebar__item-text", "{entry.title}" }
            }
        }
    }
}

/// Panel toggle control in the top bar.
#[component]
fn SidebarTrigger() -> Element {
    let sidebar = use_sidebar();

    rsx! {
        button {
            class: "c-topbar__trigger",
            aria_label: "Toggle navigation panel",
            onclick: move |_| sidebar.toggle(),
            "☰"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;

    use crate::app::navigation::{MatchStrategy, NavConfig};

    const MARKER: &str = "UNTOUCHED CONTENT 42";

    // Link requires a router; an empty navigation set keeps the shell
    // renderable standalone and doubles as the empty-group edge case.
    #[component]
    fn Host() -> Element {
        use_context_provider(|| NavConfig {
            entries: Vec::new(),
            strategy: MatchStrategy::Exact,
        });
        use_theme_provider();

        rsx! {
            LayoutShell {
                current_page_name: "Chat".to_string(),
                current_path: "/".to_string(),
                div { id: "page-marker", "{MARKER}" }
            }
        }
    }

    fn render_host() -> String {
        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_children_pass_through_into_content_region() {
        let html = render_host();

        let content_at = html
            .find("c-layout__content")
            .expect("content container missing");
        let marker_at = html.find(MARKER).expect("children were not rendered");

        assert!(
            marker_at > content_at,
            "children must land inside the content container: {html}"
        );
        assert_eq!(html.matches(MARKER).count(), 1, "children must render exactly once");
        assert!(html.contains("id=\"page-marker\""), "child markup must be unmodified");
    }

    #[test]
    fn test_empty_navigation_renders_empty_group() {
        let html = render_host();

        assert!(html.contains("c-sidebar__menu"));
        assert!(!html.contains("c-sidebar__item"));
    }
}
