//! Recoil adjustment policy section.
//!
//! Two incompatible `[recoil]` shapes shipped historically: an explicit
//! `method` selector alongside both value fields, and a `remove` flag that
//! overrides method selection entirely. Both are accepted via an untagged
//! union; `mode()` resolves either shape to the single algorithm to run.

use serde::{Deserialize, Serialize};

/// Adjustment method selector for the `method`-based shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoilMethod {
    /// Replace every adjustable value with a fixed constant.
    Precise,
    /// Scale every adjustable value by a signed relative percentage.
    Percent,
}

/// The `[recoil]` section. All fields of the chosen shape are required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecoilConfig {
    /// `method` + `precise` + `percent` shape.
    Method {
        method: RecoilMethod,
        /// Absolute replacement value for precise mode. Domain [0.0, 1.0].
        precise: f64,
        /// Signed relative adjustment in percentage points. Domain [-99, 100].
        percent: i64,
    },
    /// `remove` + `percent` shape. `remove = true` zeroes every adjustable
    /// value; `remove = false` falls through to percent mode.
    Remove { remove: bool, percent: i64 },
}

/// Resolved adjustment algorithm, independent of which config shape
/// selected it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustMode {
    /// New value is 0.0 unconditionally.
    Remove,
    /// New value is the carried constant, independent of the old value.
    Precise(f64),
    /// New value is the old value scaled by the carried signed percentage.
    Percent(i64),
}

impl RecoilConfig {
    /// Resolve the configured shape to the algorithm to run.
    pub fn mode(&self) -> AdjustMode {
        match *self {
            Self::Method {
                method: RecoilMethod::Precise,
                precise,
                ..
            } => AdjustMode::Precise(precise),
            Self::Method {
                method: RecoilMethod::Percent,
                percent,
                ..
            } => AdjustMode::Percent(percent),
            Self::Remove { remove: true, .. } => AdjustMode::Remove,
            Self::Remove {
                remove: false,
                percent,
            } => AdjustMode::Percent(percent),
        }
    }

    /// The signed percentage carried by this shape.
    pub fn percent(&self) -> i64 {
        match *self {
            Self::Method { percent, .. } | Self::Remove { percent, .. } => percent,
        }
    }
}
