//! Structured logging module for the J.A.R.V.I.S console
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured fields so log lines stay grep-able in the browser console.

/// Log categories for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    ThemePersistence,
    KnowledgeSearch,
    ChatTurn,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::ThemePersistence => "theme_persistence",
            LogOperation::KnowledgeSearch => "knowledge_search",
            LogOperation::ChatTurn => "chat_turn",
        }
    }
}

/// Log a navigation link activation
pub fn log_navigation(target: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        target = target,
        "Navigation link activated"
    );
}

/// Log a theme change
pub fn log_theme_change(theme: &str) {
    tracing::info!(
        operation = LogOperation::ThemePersistence.as_str(),
        theme = theme,
        "Theme changed"
    );
}

/// Log a theme persistence failure (non-fatal, the theme still applies)
pub fn log_theme_save_error(theme: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::ThemePersistence.as_str(),
        theme = theme,
        error = error,
        "Failed to persist theme"
    );
}

/// Log a knowledge-base search
pub fn log_knowledge_search(query: &str, matches: usize) {
    tracing::debug!(
        operation = LogOperation::KnowledgeSearch.as_str(),
        query = query,
        match_count = matches,
        "Knowledge base filtered"
    );
}

/// Log a completed chat exchange
pub fn log_chat_turn(message_count: usize) {
    tracing::debug!(
        operation = LogOperation::ChatTurn.as_str(),
        message_count = message_count,
        "Chat turn completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::ThemePersistence.as_str(), "theme_persistence");
        assert_eq!(LogOperation::KnowledgeSearch.as_str(), "knowledge_search");
        assert_eq!(LogOperation::ChatTurn.as_str(), "chat_turn");
    }
}
