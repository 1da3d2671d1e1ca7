//! Weapon item records and the eligibility predicate.

use serde::{Deserialize, Serialize};

use super::Vec3;

/// A single item record, keyed by id in the provider's mapping.
///
/// Field names follow the wire format of the item database (`_name`,
/// `_props`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Internal item name, used in diagnostics.
    #[serde(rename = "_name", default)]
    pub name: String,
    /// The item's properties bag.
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
}

/// The properties bag of an item record.
///
/// Every recoil-related field is optional: most items in the database are
/// not weapons and carry none of them. Presence is modeled with `Option`
/// rather than dynamic property lookups, so eligibility is a plain
/// predicate over populated options. Properties this system does not
/// inspect are preserved verbatim in `rest` across in-place mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemProps {
    /// Marker: short display name. Required for eligibility.
    #[serde(rename = "ShortName", skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Marker: weapon class. Required for eligibility.
    #[serde(rename = "weapClass", skip_serializing_if = "Option::is_none")]
    pub weap_class: Option<String>,

    /// Primary adjustment target. Required for eligibility.
    #[serde(rename = "CameraRecoil", skip_serializing_if = "Option::is_none")]
    pub camera_recoil: Option<f64>,

    /// Extended scalar target, adjusted when present.
    #[serde(rename = "CameraSnap", skip_serializing_if = "Option::is_none")]
    pub camera_snap: Option<f64>,

    /// Extended scalar target, adjusted when present.
    #[serde(rename = "RecoilForceUp", skip_serializing_if = "Option::is_none")]
    pub recoil_force_up: Option<f64>,

    /// Extended scalar target, adjusted when present.
    #[serde(rename = "RecoilForceBack", skip_serializing_if = "Option::is_none")]
    pub recoil_force_back: Option<f64>,

    /// Extended 3-axis target, adjusted per component when present.
    #[serde(rename = "RecoilCenter", skip_serializing_if = "Option::is_none")]
    pub recoil_center: Option<Vec3>,

    /// All other properties, passed through untouched.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl ItemProps {
    /// Eligibility predicate: all required marker/value fields present.
    ///
    /// Partial presence means the record is skipped entirely; a record is
    /// never partially mutated.
    pub fn is_recoil_adjustable(&self) -> bool {
        self.short_name.is_some() && self.camera_recoil.is_some() && self.weap_class.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_props() -> ItemProps {
        ItemProps {
            short_name: Some("M4A1".to_string()),
            weap_class: Some("assaultRifle".to_string()),
            camera_recoil: Some(0.5),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_required_fields_present_is_adjustable() {
        assert!(full_props().is_recoil_adjustable());
    }

    #[test]
    fn test_missing_any_required_field_is_not_adjustable() {
        let mut p = full_props();
        p.short_name = None;
        assert!(!p.is_recoil_adjustable());

        let mut p = full_props();
        p.weap_class = None;
        assert!(!p.is_recoil_adjustable());

        let mut p = full_props();
        p.camera_recoil = None;
        assert!(!p.is_recoil_adjustable());
    }

    #[test]
    fn test_extended_fields_do_not_affect_eligibility() {
        let mut p = full_props();
        p.camera_snap = Some(0.1);
        p.recoil_center = Some(Vec3::new(0.0, -0.1, 0.0));
        assert!(p.is_recoil_adjustable());

        let p = ItemProps {
            camera_snap: Some(0.1),
            ..Default::default()
        };
        assert!(!p.is_recoil_adjustable());
    }

    #[test]
    fn test_unknown_properties_round_trip() {
        let json = r#"{
            "_name": "weapon_colt_m4a1",
            "_props": {
                "ShortName": "M4A1",
                "weapClass": "assaultRifle",
                "CameraRecoil": 0.014,
                "Ergonomics": 44,
                "Velocity": 1.2
            }
        }"#;
        let record: ItemRecord = serde_json::from_str(json).unwrap();
        assert!(record.props.is_recoil_adjustable());
        assert_eq!(record.props.rest.get("Ergonomics"), Some(&serde_json::json!(44)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["_props"]["Ergonomics"], serde_json::json!(44));
        assert_eq!(back["_props"]["Velocity"], serde_json::json!(1.2));
    }
}
