//! Centralized error types for LazyTable.
//!
//! This module provides a unified error hierarchy with user-friendly
//! messages. All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while reading or writing a single record field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The record has no field with this key.
    #[error("unknown field '{0}'")]
    Missing(String),

    /// The value could not be converted to the field's type.
    #[error("invalid value '{value}' for field '{key}': {reason}")]
    Invalid {
        /// The field key.
        key: String,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl FieldError {
    /// Create an invalid-value error.
    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FieldError::Invalid {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by the table state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// A pending change could not be applied to the record.
    #[error("{0}")]
    Field(#[from] FieldError),

    /// The caller's save callback reported a failure.
    #[error("Save failed: {0}")]
    SaveFailed(String),

    /// Inline editing was requested but no edit callback is configured.
    #[error("Inline editing is not enabled for this table")]
    NoEditCallback,

    /// A save for this row is still running.
    #[error("A save for this row is already in progress")]
    SaveInFlight,

    /// The cursor is not on a row.
    #[error("No row is selected")]
    NoSelection,

    /// Save or discard was requested with no row in edit mode.
    #[error("No row is being edited")]
    NotEditing,
}

/// The main application error type.
///
/// This enum aggregates all error types that can occur in LazyTable,
/// providing user-friendly error messages while preserving the underlying
/// error context for debugging.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Table-related errors.
    #[error("{0}")]
    Table(#[from] TableError),

    /// IO errors (file system, terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable.".to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Table(e) => match e {
                TableError::Field(FieldError::Invalid { key, value, .. }) => {
                    format!("'{}' is not a valid value for {}.", value, key)
                }
                TableError::Field(FieldError::Missing(key)) => {
                    format!("The row has no field named '{}'.", key)
                }
                TableError::SaveFailed(msg) => format!("Could not save changes: {}", msg),
                TableError::NoEditCallback => "This table is read-only.".to_string(),
                TableError::SaveInFlight => {
                    "Still saving the previous change. Please wait.".to_string()
                }
                TableError::NoSelection => "Select a row first.".to_string(),
                TableError::NotEditing => "No row is being edited.".to_string(),
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Check if this error is critical and requires user acknowledgment.
    pub fn is_critical(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::Terminal(_))
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
