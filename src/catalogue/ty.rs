use crate::stop::Stop;

/// A built-in preset.
pub(crate) struct PresetData {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) stops: Vec<Stop>, // Invariant: length ≥ 2, distinct
    pub(crate) min: f64,
    pub(crate) max: f64,
    /// `false` when the lightness of each stop is its own number.
    pub(crate) distributed: bool,
}
