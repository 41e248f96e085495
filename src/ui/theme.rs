//! Theme and styling configuration.
//!
//! The active theme is chosen once at startup with `init_theme` and read
//! everywhere else through `theme()`.

use std::sync::OnceLock;

use ratatui::style::Color;
use tracing::{debug, warn};

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color theme for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Accent color for focus and highlights.
    pub accent: Color,
    /// Border color of unfocused widgets.
    pub border: Color,
    /// Border color of focused widgets.
    pub border_focused: Color,
    /// Text color inside editors.
    pub input_fg: Color,
    /// Placeholder text color.
    pub input_placeholder: Color,
    /// Table header color.
    pub header: Color,
    /// Background of the row under the cursor.
    pub row_highlight: Color,
    /// Background of the row being edited.
    pub row_editing: Color,
    /// Skeleton placeholder color.
    pub skeleton: Color,
    /// Muted text (hints, empty state).
    pub muted: Color,
    /// Success color (save).
    pub success: Color,
    /// Warning color.
    pub warning: Color,
    /// Error and destructive action color (delete).
    pub error: Color,
}

impl Theme {
    /// The dark theme (default).
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            accent: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            input_fg: Color::White,
            input_placeholder: Color::DarkGray,
            header: Color::Gray,
            row_highlight: Color::Rgb(40, 44, 52),
            row_editing: Color::Rgb(30, 50, 60),
            skeleton: Color::DarkGray,
            muted: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// The light theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            accent: Color::Blue,
            border: Color::Gray,
            border_focused: Color::Blue,
            input_fg: Color::Black,
            input_placeholder: Color::Gray,
            header: Color::DarkGray,
            row_highlight: Color::Rgb(225, 230, 240),
            row_editing: Color::Rgb(215, 235, 245),
            skeleton: Color::Gray,
            muted: Color::Gray,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Look up a theme by name. Unknown names fall back to dark.
pub fn load_theme(name: &str) -> Theme {
    match name {
        "dark" => Theme::dark(),
        "light" => Theme::light(),
        other => {
            warn!(theme = other, "Unknown theme, falling back to dark");
            Theme::dark()
        }
    }
}

/// Install the theme for the process. Later calls are ignored.
pub fn init_theme(name: &str) {
    if THEME.set(load_theme(name)).is_err() {
        debug!("Theme already initialized");
    }
}

/// The active theme (dark when `init_theme` was never called).
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
