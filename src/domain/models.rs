use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "J.A.R.V.I.S",
        }
    }
}

/// Message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One article in the knowledge base index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbArticle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_ids_are_unique() {
        let a = ChatMessage::new(ChatRole::User, "status report");
        let b = ChatMessage::new(ChatRole::User, "status report");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_kb_article_deserializes_without_tags() {
        let json = r#"{
            "id": "arc-reactor",
            "title": "Arc Reactor",
            "category": "Power",
            "summary": "Compact fusion power source."
        }"#;
        let article: KbArticle = serde_json::from_str(json).unwrap();
        assert!(article.tags.is_empty());
        assert_eq!(article.category, "Power");
    }
}
