//! Error types for notekeeper
//!
//! These cover the surroundings of the note store (configuration, logging,
//! terminal I/O). Note operations themselves never fail with this type; they
//! report through [`crate::domain::NoteResult`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notekeeper
#[derive(Debug, Error)]
pub enum NotekeeperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

impl NotekeeperError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotekeeperError::Config(_)
            | NotekeeperError::ConfigNotFound(_)
            | NotekeeperError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotekeeperError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset NOTEKEEPER_CONFIG to run with defaults",
                    path.display()
                )
            }
            NotekeeperError::TomlDeserialize(err) => {
                format!(
                    "Invalid config file: {}\n\n\
                    Valid keys: prompt, color, title_width, content_width, log_level\n\
                    Example: content_width = 40",
                    err
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotekeeperError
pub type Result<T> = std::result::Result<T, NotekeeperError>;
