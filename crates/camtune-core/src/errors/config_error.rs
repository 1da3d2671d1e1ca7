//! Configuration errors.

use super::error_code::{self, CamtuneErrorCode};

/// Errors that can occur while loading or validating the configuration.
///
/// Any of these is fatal for the run: no partial configuration is usable,
/// and the caller must abort the adjustment pass (log and return, not
/// terminate the host process).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration value for `{field}`: {message}")]
    ValidationFailed { field: String, message: String },
}

impl CamtuneErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CONFIG_NOT_FOUND,
            Self::ParseError { .. } => error_code::CONFIG_PARSE,
            Self::ValidationFailed { .. } => error_code::CONFIG_INVALID,
        }
    }
}
