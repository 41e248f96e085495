//! Application settings configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default number of rows per table page.
    pub items_per_page: usize,
    /// The UI theme to use ("dark" or "light").
    pub theme: String,
    /// Whether to use vim-style keybindings alongside the arrow keys.
    pub vim_mode: bool,
    /// How long the demo shows its loading skeleton, in milliseconds.
    pub loading_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_per_page: 5,
            theme: "dark".to_string(),
            vim_mode: true,
            loading_ms: 800,
        }
    }
}

impl Settings {
    /// Validate the settings.
    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(ConfigError::ValidationError(
                "items_per_page must be at least 1".to_string(),
            ));
        }

        if !matches!(self.theme.as_str(), "dark" | "light") {
            return Err(ConfigError::ValidationError(format!(
                "unknown theme '{}', expected 'dark' or 'light'",
                self.theme
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.items_per_page, 5);
        assert_eq!(settings.theme, "dark");
        assert!(settings.vim_mode);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let settings = Settings {
            theme: "solarized".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }
}
