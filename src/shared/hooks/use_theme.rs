use dioxus::prelude::*;
use std::str::FromStr;

#[cfg(target_arch = "wasm32")]
use crate::shared::errors::AppError;
use crate::shared::errors::Result;
use crate::shared::logging;

#[cfg(target_arch = "wasm32")]
const THEME_STORAGE_KEY: &str = "theme";

/// Available themes - unified enum for all theme components
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Dark, Theme::Light]
    }

    /// Get the appropriate default theme based on system preference
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            // Unknown stored values fall back to dark
            _ => Ok(Theme::Dark),
        }
    }
}

/// Install the theme signal into context so every consumer shares one state,
/// restore the saved theme on mount (falling back to the system preference)
/// and keep the document's theme class in sync. Call once, from the layout
/// shell.
pub fn use_theme_provider() -> Signal<Theme> {
    let mut current_theme = use_signal(|| Theme::Dark);
    use_context_provider(|| current_theme);

    use_effect(move || {
        let theme = match load_saved_theme() {
            Some(saved) => saved,
            None => Theme::system_default(system_prefers_dark()),
        };
        current_theme.set(theme);
        apply_theme_css(theme);
    });

    current_theme
}

/// Read the shared theme signal from context.
pub fn use_theme() -> Signal<Theme> {
    use_context()
}

/// Apply the theme and persist it. Persistence failures are logged, not fatal.
pub fn set_theme(mut signal: Signal<Theme>, theme: Theme) {
    signal.set(theme);
    apply_theme_css(theme);
    logging::log_theme_change(theme.as_str());
    if let Err(e) = save_theme(theme) {
        logging::log_theme_save_error(theme.as_str(), &e.to_string());
    }
}

/// Read the persisted theme from localStorage, if any.
#[cfg(target_arch = "wasm32")]
fn load_saved_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let saved = storage.get_item(THEME_STORAGE_KEY).ok()??;
    saved.parse::<Theme>().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_saved_theme() -> Option<Theme> {
    None
}

/// Check the `prefers-color-scheme` media query.
#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(true)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    true
}

/// Apply theme CSS class to the document element
#[cfg(target_arch = "wasm32")]
fn apply_theme_css(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    for t in Theme::all() {
        let _ = classes.remove_1(t.as_str());
    }
    let _ = classes.add_1(theme.as_str());
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_css(_theme: Theme) {
    // No-op off the web
}

/// Save theme to localStorage
#[cfg(target_arch = "wasm32")]
pub fn save_theme(theme: Theme) -> Result<()> {
    let storage = web_sys::window()
        .ok_or(AppError::StorageUnavailable)?
        .local_storage()
        .map_err(|e| AppError::StorageError(format!("{e:?}")))?
        .ok_or(AppError::StorageUnavailable)?;

    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| AppError::StorageError(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_theme(_theme: Theme) -> Result<()> {
    Ok(())
}
