//! Stable string error codes for host-facing reporting.

/// Configuration file could not be read.
pub const CONFIG_NOT_FOUND: &str = "CAMTUNE_CONFIG_NOT_FOUND";
/// Configuration blob could not be parsed.
pub const CONFIG_PARSE: &str = "CAMTUNE_CONFIG_PARSE";
/// Configuration parsed but failed range/shape validation.
pub const CONFIG_INVALID: &str = "CAMTUNE_CONFIG_INVALID";

/// Maps an error to its stable string code.
///
/// Codes are part of the host-facing contract and must not change between
/// releases even when error messages are reworded.
pub trait CamtuneErrorCode {
    /// Return the stable code for this error.
    fn error_code(&self) -> &'static str;
}
