//! Event payload types for the adjustment pass.

/// Payload for `on_field_adjusted`. One per mutated field; vector
/// components are reported as separate fields (`RecoilCenter.x` etc.).
#[derive(Debug, Clone)]
pub struct FieldAdjustedEvent {
    pub item_id: String,
    pub name: String,
    pub weap_class: String,
    pub field: &'static str,
    pub old: f64,
    pub new: f64,
}

/// Payload for `on_field_clamped`. Fired when a computed value was
/// strictly negative and forced up to zero.
#[derive(Debug, Clone)]
pub struct FieldClampedEvent {
    pub item_id: String,
    pub name: String,
    pub field: &'static str,
    /// The negative value the method computed before clamping.
    pub attempted: f64,
}

/// Payload for `on_pass_complete`.
#[derive(Debug, Clone)]
pub struct PassCompleteEvent {
    /// Number of records with at least one mutated field.
    pub changed: usize,
}
