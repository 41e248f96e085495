//! Key binding definitions and contextual hints.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input context, used to pick the hints shown in the help bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Browsing rows.
    Viewing,
    /// A row is being edited.
    Editing,
    /// The delete confirmation is open.
    Confirm,
    /// Records are still loading.
    Loading,
}

/// Get the hint line for a context.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Viewing => {
            "[j/k] move  [h/l] page  [g/G] first/last  [+/-] rows  [v] view  [o] open  [d] delete  [e] edit  [q] quit"
        }
        KeyContext::Editing => {
            "[Tab] next cell  [Ctrl-S/Enter] save  [Esc] discard  [↑/↓] date ±1 day"
        }
        KeyContext::Confirm => "[y] continue  [n/Esc] cancel  [Tab] switch",
        KeyContext::Loading => "[q] quit",
    }
}

/// Key binding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Whether vim-style bindings are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    /// Normalize a key to its arrow-key equivalent.
    ///
    /// With vim mode on, `h/j/k/l` act as the arrow keys. Other keys pass
    /// through unchanged.
    pub fn normalize(&self, key: KeyEvent) -> KeyEvent {
        if !self.vim_mode || key.modifiers != KeyModifiers::NONE {
            return key;
        }
        let code = match key.code {
            KeyCode::Char('h') => KeyCode::Left,
            KeyCode::Char('j') => KeyCode::Down,
            KeyCode::Char('k') => KeyCode::Up,
            KeyCode::Char('l') => KeyCode::Right,
            other => other,
        };
        KeyEvent::new(code, key.modifiers)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}
