//! Core types, traits, errors, config, events, and tracing for camtune.
//!
//! camtune mutates the recoil-related numeric properties of weapon item
//! records according to a validated configuration. This crate carries
//! everything the adjustment pass in `camtune-engine` consumes: the typed
//! configuration and its validator, the item record model, the event
//! dispatch seam, and the record-provider trait.

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod model;
pub mod traits;

pub use config::{AdjustMode, GeneralConfig, RecoilConfig, RecoilMethod, TuneConfig};
pub use errors::ConfigError;
pub use model::{ItemProps, ItemRecord, Vec3};
