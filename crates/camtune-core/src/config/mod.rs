//! Configuration system for camtune.
//! TOML/JSON based, parse-then-validate, immutable after validation.

pub mod general_config;
pub mod recoil_config;
pub mod tune_config;

pub use general_config::GeneralConfig;
pub use recoil_config::{AdjustMode, RecoilConfig, RecoilMethod};
pub use tune_config::TuneConfig;
