pub mod use_sidebar;
pub mod use_theme;

pub use use_sidebar::{use_sidebar, use_sidebar_provider, SidebarState};
pub use use_theme::{save_theme, set_theme, use_theme, use_theme_provider, Theme};
