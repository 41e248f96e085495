//! Loading feedback.
//!
//! A spinner for in-flight work (loading records, saving a row) and the
//! placeholder bars drawn in skeleton rows.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Alternative spinner using simple characters for compatibility.
const SIMPLE_SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Character used to draw skeleton bars.
const SKELETON_CHAR: char = '░';

/// The type of spinner to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerStyle {
    /// Braille dots spinner (default).
    #[default]
    Braille,
    /// Simple ASCII spinner for compatibility.
    Simple,
}

impl SpinnerStyle {
    /// Get the frames for this spinner style.
    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Braille => SPINNER_FRAMES,
            SpinnerStyle::Simple => SIMPLE_SPINNER_FRAMES,
        }
    }
}

/// A loading indicator with an animated spinner.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    /// The message to display.
    message: String,
    /// Current spinner frame index.
    spinner_state: usize,
    /// The spinner style.
    spinner_style: SpinnerStyle,
    /// Whether the loading indicator is active.
    active: bool,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::with_message("Loading...")
    }
}

impl LoadingIndicator {
    /// Create a loading indicator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            spinner_state: 0,
            spinner_style: SpinnerStyle::default(),
            active: false,
        }
    }

    /// Set the spinner style.
    pub fn with_style(mut self, style: SpinnerStyle) -> Self {
        self.spinner_style = style;
        self
    }

    /// Get the current message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Start the loading indicator.
    pub fn start(&mut self) {
        self.active = true;
        self.spinner_state = 0;
    }

    /// Stop the loading indicator.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Check if the loading indicator is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the spinner animation. Called on each tick.
    pub fn tick(&mut self) {
        if self.active {
            let frames = self.spinner_style.frames();
            self.spinner_state = (self.spinner_state + 1) % frames.len();
        }
    }

    /// Get the current spinner frame.
    pub fn spinner_frame(&self) -> &'static str {
        let frames = self.spinner_style.frames();
        frames[self.spinner_state % frames.len()]
    }

    /// Get the formatted loading text, empty when inactive.
    pub fn text(&self) -> String {
        if self.active {
            format!("{} {}", self.spinner_frame(), self.message)
        } else {
            String::new()
        }
    }

    /// Render the loading indicator left-aligned in the given area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.active {
            return;
        }

        let paragraph = Paragraph::new(self.text())
            .style(Style::default().fg(theme().accent))
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }
}

/// A placeholder bar for a skeleton cell.
///
/// Bar lengths vary with the row and column so the skeleton does not look
/// like a solid block.
pub fn skeleton_bar(row: usize, column: usize, max_width: usize) -> Span<'static> {
    let fraction = [0.8, 0.55, 0.7, 0.4, 0.65][(row * 3 + column) % 5];
    let width = ((max_width as f64 * fraction) as usize).max(1);
    Span::styled(
        SKELETON_CHAR.to_string().repeat(width),
        Style::default().fg(theme().skeleton),
    )
}
