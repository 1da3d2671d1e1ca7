//! Top-level camtune configuration: parse then validate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GeneralConfig, RecoilConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating both required sections.
///
/// Immutable once validated: the adjustment pass takes it by shared
/// reference and never writes back. Constructed once per run and discarded
/// after the pass completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuneConfig {
    pub general: GeneralConfig,
    pub recoil: RecoilConfig,
}

impl TuneConfig {
    /// Parse a configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TuneConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON string and validate it.
    ///
    /// Historical config files were JSON; both formats carry the same
    /// logical shape.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: TuneConfig =
            serde_json::from_str(json_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a single configuration file.
    ///
    /// Format is chosen by extension: `.json` parses as JSON, anything else
    /// as TOML. No discovery, no layering, no environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config: TuneConfig = if is_json {
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate scalar ranges. First violation wins.
    ///
    /// `recoil.precise` must be within [0.0, 1.0]; `recoil.percent` within
    /// [-99, 100] in either shape. Structural problems (missing sections or
    /// fields) never reach this point; serde rejects them at parse time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let RecoilConfig::Method { precise, .. } = self.recoil {
            if !(0.0..=1.0).contains(&precise) {
                return Err(ConfigError::ValidationFailed {
                    field: "recoil.precise".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        let percent = self.recoil.percent();
        if !(-99..=100).contains(&percent) {
            return Err(ConfigError::ValidationFailed {
                field: "recoil.percent".to_string(),
                message: "must be between -99 and 100".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
