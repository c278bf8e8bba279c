use dioxus::prelude::*;

use crate::app::layouts::AppShell;
use crate::app::navigation::NavConfig;
use crate::app::pages::{About, Chat, KnowledgeBase, Settings};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
    // Landing page - the conversation surface
    #[route("/")]
    Chat {},

    #[route("/knowledge-base")]
    KnowledgeBase {},
    #[route("/settings")]
    Settings {},
    #[route("/about")]
    About {},
}

impl Route {
    /// Display label for the page behind this route.
    pub fn page_name(&self) -> &'static str {
        match self {
            Route::Chat {} => "Chat",
            Route::KnowledgeBase {} => "Knowledge Base",
            Route::Settings {} => "Settings",
            Route::About {} => "About",
        }
    }
}

#[component]
pub fn App() -> Element {
    // Navigation set is injected here so hosts and tests can substitute it
    use_context_provider(NavConfig::default);

    use_effect(|| {
        tracing::info!("J.A.R.V.I.S console initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Chat {}.to_string(), "/");
        assert_eq!(Route::KnowledgeBase {}.to_string(), "/knowledge-base");
        assert_eq!(Route::Settings {}.to_string(), "/settings");
        assert_eq!(Route::About {}.to_string(), "/about");
    }

    #[test]
    fn test_page_names() {
        assert_eq!(Route::Chat {}.page_name(), "Chat");
        assert_eq!(Route::KnowledgeBase {}.page_name(), "Knowledge Base");
    }

    #[test]
    fn test_default_nav_targets_resolve_to_routes() {
        // Every navigation entry must point at a real route
        for entry in NavConfig::default().entries {
            assert!(
                entry.url.parse::<Route>().is_ok(),
                "nav entry {} has unroutable url {}",
                entry.title,
                entry.url
            );
        }
    }
}
