//! Preguntas - true/false quiz
//!
//! A terminal quiz over a fixed set of questions with correct/incorrect
//! statistics that survive restarts.

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod stats;

// Common error types
#[derive(Debug)]
pub enum QuizError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Reading or writing persisted preferences failed
    PersistenceError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Logging subscriber could not be installed
    LoggingError(String),
    /// Route id that names no screen
    UnknownRoute(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuizError::PersistenceError(msg) => write!(f, "Persistence error: {}", msg),
            QuizError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            QuizError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
            QuizError::UnknownRoute(route) => write!(f, "Unknown route: {:?}", route),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::IoError(err)
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Error handling utilities
pub mod error {
    use super::QuizError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &QuizError) -> String {
        match error {
            QuizError::PersistenceError(_) => {
                "Statistics could not be read or saved. Check disk space and permissions."
                    .to_string()
            }
            QuizError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            QuizError::UnknownRoute(route) => {
                format!(
                    "No screen is called {:?}. Use MainMenu, question or statistics.",
                    route
                )
            }
            QuizError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check file permissions of the data directory.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "preguntas";
pub const CONFIG_FILE: &str = "preguntas.toml";
pub const LOG_FILE: &str = "preguntas.log";
/// Namespace of the persisted key-value preferences
pub const PREFERENCES_NAME: &str = "preguntas_preferences";
