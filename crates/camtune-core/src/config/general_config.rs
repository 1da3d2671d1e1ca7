//! General (master switch) configuration section.

use serde::{Deserialize, Serialize};

/// The `[general]` section. Both fields are required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Master on/off switch. A disabled config still validates; skipping
    /// the pass is the caller's go/no-go decision, not a validation failure.
    pub enabled: bool,
    /// When true, emit one diagnostic event/log line per mutated field.
    pub debug: bool,
}
