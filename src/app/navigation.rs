//! Side panel navigation model.
//!
//! The navigation set is an explicit immutable configuration value provided to
//! the layout via context, not module-level state, so tests and alternative
//! hosts can substitute their own.

use crate::app::routes::Route;

/// One link descriptor in the side panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    /// Display label, unique within a config
    pub title: &'static str,
    /// Target path, compared against the current location
    pub url: String,
    /// Glyph rendered next to the label
    pub icon: &'static str,
}

impl NavEntry {
    pub fn new(title: &'static str, url: impl Into<String>, icon: &'static str) -> Self {
        Self {
            title,
            url: url.into(),
            icon,
        }
    }
}

/// How the current path is compared against an entry's target path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MatchStrategy {
    /// Byte-for-byte equality. No trailing-slash normalization, no query
    /// handling.
    #[default]
    Exact,
    /// Target is a prefix of the current path. Useful for nested routes, but
    /// note that "/" matches everything.
    Prefix,
}

impl MatchStrategy {
    pub fn is_active(&self, current_path: &str, target: &str) -> bool {
        match self {
            MatchStrategy::Exact => current_path == target,
            MatchStrategy::Prefix => current_path.starts_with(target),
        }
    }
}

/// Ordered, fixed navigation set plus the matching strategy that drives
/// highlight state. Order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    pub entries: Vec<NavEntry>,
    pub strategy: MatchStrategy,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            entries: vec![
                NavEntry::new("Chat", Route::Chat {}.to_string(), "💬"),
                NavEntry::new("Knowledge Base", Route::KnowledgeBase {}.to_string(), "🗄️"),
                NavEntry::new("Settings", Route::Settings {}.to_string(), "⚙️"),
                NavEntry::new("About", Route::About {}.to_string(), "ℹ️"),
            ],
            strategy: MatchStrategy::Exact,
        }
    }
}

impl NavConfig {
    /// Highlight state per entry for the given path, in display order.
    pub fn active_flags(&self, current_path: &str) -> Vec<bool> {
        self.entries
            .iter()
            .map(|entry| self.strategy.is_active(current_path, &entry.url))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_entry_config() -> NavConfig {
        NavConfig {
            entries: vec![
                NavEntry::new("Chat", "/chat", "💬"),
                NavEntry::new("Knowledge Base", "/kb", "🗄️"),
            ],
            strategy: MatchStrategy::Exact,
        }
    }

    #[test]
    fn test_default_config_order() {
        let config = NavConfig::default();
        let titles: Vec<&str> = config.entries.iter().map(|e| e.title).collect();
        assert_eq!(titles, ["Chat", "Knowledge Base", "Settings", "About"]);
    }

    #[test]
    fn test_default_config_urls_are_distinct() {
        let config = NavConfig::default();
        for (i, a) in config.entries.iter().enumerate() {
            for b in &config.entries[i + 1..] {
                assert_ne!(a.url, b.url, "duplicate url would make highlighting ambiguous");
            }
        }
    }

    #[test]
    fn test_each_entry_activates_exactly_itself() {
        let config = NavConfig::default();
        for (i, entry) in config.entries.iter().enumerate() {
            let flags = config.active_flags(&entry.url);
            for (j, flag) in flags.iter().enumerate() {
                assert_eq!(*flag, i == j, "path {} flagged entry {}", entry.url, j);
            }
        }
    }

    #[test]
    fn test_unknown_path_activates_nothing() {
        let config = NavConfig::default();
        assert!(config.active_flags("/unknown").iter().all(|f| !f));
    }

    #[test]
    fn test_kb_path_highlights_only_knowledge_base() {
        let config = two_entry_config();
        assert_eq!(config.active_flags("/kb"), [false, true]);
    }

    #[test]
    fn test_exact_match_ignores_trailing_slash() {
        let config = two_entry_config();
        assert_eq!(config.active_flags("/kb/"), [false, false]);
    }

    #[test]
    fn test_prefix_strategy_matches_nested_paths() {
        let mut config = two_entry_config();
        config.strategy = MatchStrategy::Prefix;
        assert_eq!(config.active_flags("/kb/articles/42"), [false, true]);
    }

    #[test]
    fn test_duplicate_urls_are_all_marked_active() {
        // Not guarded at construction; exact match marks every duplicate.
        let config = NavConfig {
            entries: vec![
                NavEntry::new("A", "/same", "💬"),
                NavEntry::new("B", "/same", "🗄️"),
            ],
            strategy: MatchStrategy::Exact,
        };
        assert_eq!(config.active_flags("/same"), [true, true]);
    }

    #[test]
    fn test_empty_config_resolves_to_empty() {
        let config = NavConfig {
            entries: Vec::new(),
            strategy: MatchStrategy::Exact,
        };
        assert!(config.active_flags("/chat").is_empty());
    }
}
