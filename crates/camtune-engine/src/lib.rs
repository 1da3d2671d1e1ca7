//! Camera recoil adjustment pass.
//!
//! Consumes a validated [`camtune_core::TuneConfig`] and an item record
//! mapping, mutates every eligible record's recoil fields in place
//! according to the configured mode, and reports how many records changed.

pub mod adjuster;

pub use adjuster::{run, AdjustmentReport, RecoilAdjuster};
