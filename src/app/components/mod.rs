pub mod chat_input;
pub mod common;
pub mod message_item;
pub mod theme_toggle;

pub use chat_input::ChatInput;
pub use common::EmptyState;
pub use message_item::MessageItem;
pub use theme_toggle::ThemeToggle;
