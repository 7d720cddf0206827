//! Error types for couscous-apps

use thiserror::Error;

/// Result type alias using couscous-apps's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// App scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid app name
    #[error("Invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },

    /// No app names given
    #[error("At least one app name is required")]
    NoAppNames,

    /// Command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Generator command misconfigured
    #[error("The startapp command is empty")]
    EmptyCommand,

    /// Generator command ran and failed
    #[error("startapp failed for '{name}': {stderr}")]
    StartAppFailed { name: String, stderr: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid app name error
    pub fn invalid_app_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAppName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a startapp failure error
    pub fn start_app_failed(name: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::StartAppFailed {
            name: name.into(),
            stderr: stderr.into(),
        }
    }
}
