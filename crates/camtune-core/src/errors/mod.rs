//! Error handling for camtune.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The adjustment pass itself has no error type: a record missing required
//! fields is a normal skip condition, not a failure. The only fatal
//! condition in the system is an invalid configuration.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::CamtuneErrorCode;
