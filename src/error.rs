//! Error type shared by the whole crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while building or editing a scale.
#[derive(Debug, Error)]
pub enum Error {
    /// A scale needs at least two stops to spread lightness between.
    #[error("a scale needs at least 2 stops, got {0}")]
    TooFewStops(usize),

    /// `min`/`max` outside `0 <= min <= max <= 100`.
    #[error("invalid lightness bounds: min {min}, max {max}")]
    InvalidBounds { min: f64, max: f64 },

    /// NaN or infinite lightness.
    #[error("lightness must be finite, got {0}")]
    InvalidLightness(f64),

    /// Two stops would map to the same key.
    #[error("duplicate stop {0}")]
    DuplicateStop(u32),

    #[error("unknown distribution easing “{0}”")]
    UnknownEasing(String),

    #[error("unknown naming convention “{0}”")]
    UnknownNamingConvention(String),

    /// Key not of the form `lightness-<integer>`.
    #[error("malformed stop key “{0}”")]
    MalformedStopKey(String),

    /// The key is not part of the scale being edited.
    #[error("no stop “{0}” in the scale")]
    UnknownStop(String),

    /// Adding or removing would leave the allowed stop count range.
    #[error("stop count must stay within {min}..={max}")]
    StopLimit { min: usize, max: usize },

    /// Structural edits are reserved to the Custom preset.
    #[error("preset {0} has a fixed number of stops")]
    NotCustomPreset(String),

    #[error("a gesture is already in progress")]
    GestureInProgress,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
