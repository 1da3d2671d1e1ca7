//! Camera recoil adjustment over the item mapping.
//!
//! One sequential traversal, no I/O inside the loop, iteration order
//! immaterial. Ineligible records are skipped silently: missing fields are
//! normal for most of the database (ammo, armor, containers), not an error.

use camtune_core::config::{AdjustMode, TuneConfig};
use camtune_core::events::{
    EventDispatcher, FieldAdjustedEvent, FieldClampedEvent, PassCompleteEvent,
};
use camtune_core::model::ItemRecord;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::AdjustmentReport;

/// One mutated field on a record: scalar fields plus up to three vector
/// components fit without spilling.
type FieldChanges = SmallVec<[FieldChange; 8]>;

/// A single field mutation, recorded for diagnostics.
#[derive(Debug, Clone, Copy)]
struct FieldChange {
    field: &'static str,
    old: f64,
    new: f64,
    /// The negative value the method computed, when clamping fired.
    clamped_from: Option<f64>,
}

/// Applies the configured recoil adjustment to every eligible record.
pub struct RecoilAdjuster<'a> {
    config: &'a TuneConfig,
    dispatcher: &'a EventDispatcher,
}

impl<'a> RecoilAdjuster<'a> {
    pub fn new(config: &'a TuneConfig, dispatcher: &'a EventDispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// Run the pass once over the full item mapping.
    ///
    /// Mutation is in place: records are never cloned or replaced, only
    /// their target numeric fields overwritten.
    pub fn adjust(&self, items: &mut FxHashMap<String, ItemRecord>) -> AdjustmentReport {
        let mode = self.config.recoil.mode();
        let mut changed = 0usize;

        for (item_id, record) in items.iter_mut() {
            if !record.props.is_recoil_adjustable() {
                continue;
            }

            let changes = adjust_record(record, mode);
            if changes.is_empty() {
                continue;
            }

            changed += 1;
            if self.config.general.debug {
                self.emit_diagnostics(item_id, record, &changes);
            }
        }

        self.dispatcher.emit_pass_complete(&PassCompleteEvent { changed });
        tracing::info!(changed, "adjusted the camera recoil for {changed} weapons");

        AdjustmentReport { changed }
    }

    /// Emit one event and one debug line per mutated field.
    fn emit_diagnostics(&self, item_id: &str, record: &ItemRecord, changes: &FieldChanges) {
        let weap_class = record.props.weap_class.clone().unwrap_or_default();

        for change in changes {
            self.dispatcher.emit_field_adjusted(&FieldAdjustedEvent {
                item_id: item_id.to_string(),
                name: record.name.clone(),
                weap_class: weap_class.clone(),
                field: change.field,
                old: change.old,
                new: change.new,
            });
            tracing::debug!(
                "weapon '{}' of class '{}' has had {} modified from {} to {}",
                record.name,
                weap_class,
                change.field,
                change.old,
                change.new
            );

            if let Some(attempted) = change.clamped_from {
                self.dispatcher.emit_field_clamped(&FieldClampedEvent {
                    item_id: item_id.to_string(),
                    name: record.name.clone(),
                    field: change.field,
                    attempted,
                });
                tracing::debug!(
                    "weapon '{}' can not have negative {}; setting to 0",
                    record.name,
                    change.field
                );
            }
        }
    }
}

/// Adjust every present target field on an eligible record.
fn adjust_record(record: &mut ItemRecord, mode: AdjustMode) -> FieldChanges {
    let mut changes = FieldChanges::new();
    let props = &mut record.props;

    adjust_slot(&mut props.camera_recoil, "CameraRecoil", mode, &mut changes);
    adjust_slot(&mut props.camera_snap, "CameraSnap", mode, &mut changes);
    adjust_slot(&mut props.recoil_force_up, "RecoilForceUp", mode, &mut changes);
    adjust_slot(&mut props.recoil_force_back, "RecoilForceBack", mode, &mut changes);

    if let Some(center) = props.recoil_center.as_mut() {
        adjust_value(&mut center.x, "RecoilCenter.x", mode, &mut changes);
        adjust_value(&mut center.y, "RecoilCenter.y", mode, &mut changes);
        adjust_value(&mut center.z, "RecoilCenter.z", mode, &mut changes);
    }

    changes
}

/// Adjust an optional scalar field when it is present.
fn adjust_slot(
    slot: &mut Option<f64>,
    field: &'static str,
    mode: AdjustMode,
    changes: &mut FieldChanges,
) {
    if let Some(value) = slot.as_mut() {
        adjust_value(value, field, mode, changes);
    }
}

/// Compute, clamp, and write one field in place.
fn adjust_value(
    value: &mut f64,
    field: &'static str,
    mode: AdjustMode,
    changes: &mut FieldChanges,
) {
    let old = *value;
    let computed = next_value(mode, old);

    // Clamp strictly-negative results only: an exact zero is a valid
    // outcome and must not produce a clamp diagnostic.
    let (new, clamped_from) = if computed < 0.0 {
        (0.0, Some(computed))
    } else {
        (computed, None)
    };

    *value = new;
    changes.push(FieldChange {
        field,
        old,
        new,
        clamped_from,
    });
}

/// Compute the new value for one field under the given mode.
///
/// Remove zeroes unconditionally; precise assigns the configured constant
/// independent of the old value; percent scales the old value by the signed
/// percentage and rounds to 4 decimal places.
fn next_value(mode: AdjustMode, old: f64) -> f64 {
    match mode {
        AdjustMode::Remove => 0.0,
        AdjustMode::Precise(precise) => precise,
        AdjustMode::Percent(percent) => {
            let factor = percent.unsigned_abs() as f64 / 100.0;
            let delta = factor * old;
            let adjusted = if percent >= 0 { old + delta } else { old - delta };
            round4(adjusted)
        }
    }
}

/// Round to 4 decimal places, half away from zero (`f64::round` semantics).
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_increase() {
        // 50% increase to 0.5 = 0.75
        assert_eq!(next_value(AdjustMode::Percent(50), 0.5), 0.75);
    }

    #[test]
    fn test_percent_decrease() {
        // -50% decrease to 0.5 = 0.25
        assert_eq!(next_value(AdjustMode::Percent(-50), 0.5), 0.25);
    }

    #[test]
    fn test_percent_zero_is_identity() {
        assert_eq!(next_value(AdjustMode::Percent(0), 0.1234), 0.1234);
    }

    #[test]
    fn test_percent_rounds_to_four_places() {
        // 0.1234 * 1.33 = 0.164122 -> 0.1641
        assert_eq!(next_value(AdjustMode::Percent(33), 0.1234), 0.1641);
    }

    #[test]
    fn test_precise_ignores_old_value() {
        assert_eq!(next_value(AdjustMode::Precise(0.2), 0.9), 0.2);
        assert_eq!(next_value(AdjustMode::Precise(0.2), 0.0), 0.2);
    }

    #[test]
    fn test_remove_zeroes_everything() {
        assert_eq!(next_value(AdjustMode::Remove, 0.9), 0.0);
        assert_eq!(next_value(AdjustMode::Remove, 0.0), 0.0);
    }

    #[test]
    fn test_round4_half_away_from_zero() {
        assert_eq!(round4(0.12345), 0.1235);
        assert_eq!(round4(-0.12345), -0.1235);
        assert_eq!(round4(0.12344), 0.1234);
    }

    #[test]
    fn test_clamp_fires_only_below_zero() {
        let mut changes = FieldChanges::new();

        // A negative starting value scaled further negative gets clamped.
        let mut value = -0.5;
        adjust_value(&mut value, "CameraRecoil", AdjustMode::Percent(50), &mut changes);
        assert_eq!(value, 0.0);
        assert!(changes[0].clamped_from.is_some());

        // An exact zero result is stored as-is with no clamp diagnostic.
        changes.clear();
        let mut value = 0.0;
        adjust_value(&mut value, "CameraRecoil", AdjustMode::Percent(-50), &mut changes);
        assert_eq!(value, 0.0);
        assert!(changes[0].clamped_from.is_none());
    }
}
