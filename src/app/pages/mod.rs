pub mod about;
pub mod chat;
pub mod knowledge_base;
pub mod settings;

pub use about::About;
pub use chat::Chat;
pub use knowledge_base::KnowledgeBase;
pub use settings::Settings;
