//! Event handler trait with no-op defaults.

use super::types::{FieldAdjustedEvent, FieldClampedEvent, PassCompleteEvent};

/// Receiver for adjustment-pass events.
///
/// All methods default to no-ops so handlers implement only what they care
/// about. Handlers are fire-and-forget: they return nothing and the engine
/// ignores anything they do, including panicking.
pub trait TuneEventHandler: Send + Sync {
    /// A field on an eligible record was overwritten.
    fn on_field_adjusted(&self, event: &FieldAdjustedEvent) {
        let _ = event;
    }

    /// A computed value was negative and clamped to zero.
    fn on_field_clamped(&self, event: &FieldClampedEvent) {
        let _ = event;
    }

    /// The pass finished a full traversal.
    fn on_pass_complete(&self, event: &PassCompleteEvent) {
        let _ = event;
    }
}
