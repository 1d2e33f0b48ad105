//! Scale synthesis: spread lightness values across stops along an
//! easing curve.

use std::collections::HashSet;
use crate::easing::{self, round1, Curve, Easing};
use crate::error::{Error, Result};
use crate::scale::{Scale, LIGHTNESS_MAX, LIGHTNESS_MIN};
use crate::stop::{Stop, StopKey};

/// Returns the scale of `stops`, the first one getting the lightness
/// `max` and the last one `min`, intermediate stops following `mode`.
///
/// With [`Easing::None`] every stop gets its own number as lightness,
/// whatever `min` and `max`.
///
/// # Example
///
/// ```
/// use lightness_scale::{synthesize, Easing, StopKey};
/// let stops = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];
/// let scale = synthesize(&stops, 24., 96., Easing::Linear).unwrap();
/// assert_eq!(scale.get(StopKey::new(50)), Some(96.));
/// assert_eq!(scale.get(StopKey::new(500)), Some(56.));
/// assert_eq!(scale.get(StopKey::new(900)), Some(24.));
/// ```
pub fn synthesize(stops: &[Stop], min: f64, max: f64, mode: Easing)
                  -> Result<Scale> {
    if stops.len() < 2 { return Err(Error::TooFewStops(stops.len())) }
    if !(LIGHTNESS_MIN <= min && min <= max && max <= LIGHTNESS_MAX) {
        return Err(Error::InvalidBounds { min, max })
    }
    let mut seen = HashSet::with_capacity(stops.len());
    if let Some(&dup) = stops.iter().find(|&&s| !seen.insert(s)) {
        return Err(Error::DuplicateStop(dup))
    }
    let scale = stops.iter().zip(easing::steps(stops.len()))
        .map(|(&stop, x)| {
            let lightness = if mode.is_curve() {
                round1(easing::lerp(mode.ease(x), 0., 1., min, max))
            } else {
                stop as f64
            };
            (StopKey::new(stop), lightness)
        })
        .collect();
    Ok(scale)
}
