//! The adjustment pass: eligibility, value computation, clamping, counting.

pub mod camera_recoil;

pub use camera_recoil::RecoilAdjuster;

use camtune_core::config::TuneConfig;
use camtune_core::events::EventDispatcher;
use camtune_core::traits::ItemProvider;
use serde::Serialize;

/// Result of one adjustment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AdjustmentReport {
    /// Number of records with at least one mutated field. A record with
    /// several target fields still counts once.
    pub changed: usize,
}

/// Go/no-go entry point around the pass.
///
/// Returns `None` without touching any record when the config is disabled;
/// the decision is made once here, not per record. The config must already
/// be validated — an invalid config never reaches this function.
pub fn run(
    config: &TuneConfig,
    provider: &mut dyn ItemProvider,
    dispatcher: &EventDispatcher,
) -> Option<AdjustmentReport> {
    if !config.general.enabled {
        tracing::warn!("camtune is disabled in the config file; no changes will be made");
        return None;
    }

    Some(RecoilAdjuster::new(config, dispatcher).adjust(provider.items_mut()))
}
