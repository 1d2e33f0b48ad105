//! Distribution easings.
//!
//! An easing maps a position `x` ∈ \[0, 1\] along the scale to a
//! normalized lightness in \[0, 1\].  All easings are monotonic
//! non-decreasing with `ease(0) = 0` and `ease(1) = 1`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::Error;

/// Exponent of the regular power easings.
const POWER: f64 = 1.5;
/// Exponent of the `Slow*` power easings.
const SLOW_POWER: f64 = 1.2;
/// Once the stepping variable falls below this, it is snapped to 0.
const SNAP: f64 = 0.01;

/// A “continuous” curve parametrized by reals in \[0, 1\].
pub trait Curve {
    /// Returns the eased value of `x` ∈ \[0., 1.\].
    fn ease(&self, x: f64) -> f64;
}

/// Curve shape used to spread lightness values across the stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    SlowEaseIn,
    SlowEaseOut,
    SlowEaseInOut,
    FastEaseIn,
    FastEaseOut,
    FastEaseInOut,
    /// No curve at all: every stop keeps its own number as lightness.
    None,
}

impl Easing {
    /// Every easing, in menu order.
    pub const ALL: [Easing; 11] = [
        Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut,
        Easing::SlowEaseIn, Easing::SlowEaseOut, Easing::SlowEaseInOut,
        Easing::FastEaseIn, Easing::FastEaseOut, Easing::FastEaseInOut,
        Easing::None];

    /// Identifier used in configuration files and host messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "LINEAR",
            Easing::EaseIn => "EASE_IN",
            Easing::EaseOut => "EASE_OUT",
            Easing::EaseInOut => "EASE_IN_OUT",
            Easing::SlowEaseIn => "SLOW_EASE_IN",
            Easing::SlowEaseOut => "SLOW_EASE_OUT",
            Easing::SlowEaseInOut => "SLOW_EASE_IN_OUT",
            Easing::FastEaseIn => "FAST_EASE_IN",
            Easing::FastEaseOut => "FAST_EASE_OUT",
            Easing::FastEaseInOut => "FAST_EASE_IN_OUT",
            Easing::None => "NONE",
        }
    }

    /// Whether the easing goes through a curve (everything but
    /// [`Easing::None`]).
    #[inline]
    pub fn is_curve(self) -> bool { self != Easing::None }
}

fn ease_in(x: f64, p: f64) -> f64 { x.powf(p) }

fn ease_out(x: f64, p: f64) -> f64 { 1. - (1. - x).powf(p) }

fn ease_in_out(x: f64, p: f64) -> f64 {
    if x < 0.5 { 2f64.powf(p - 1.) * x.powf(p) }
    else { 1. - (-2. * x + 2.).powf(p) / 2. }
}

impl Curve for Easing {
    /// [`Easing::None`] has no curve and behaves as the identity.
    fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0., 1.);
        match self {
            Easing::Linear | Easing::None => x,
            Easing::EaseIn => ease_in(x, POWER),
            Easing::EaseOut => ease_out(x, POWER),
            Easing::EaseInOut => ease_in_out(x, POWER),
            Easing::SlowEaseIn => ease_in(x, SLOW_POWER),
            Easing::SlowEaseOut => ease_out(x, SLOW_POWER),
            Easing::SlowEaseInOut => ease_in_out(x, SLOW_POWER),
            Easing::FastEaseIn => 1. - (x * PI / 2.).cos(),
            Easing::FastEaseOut => (x * PI / 2.).sin(),
            Easing::FastEaseInOut => -((PI * x).cos() - 1.) / 2.,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = Error;

    /// Unknown identifiers are an error, there is no fallback curve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL.iter().copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| Error::UnknownEasing(s.to_string()))
    }
}

/// Return an iterator yielding the `n` positions at which the stops
/// of a scale sample an easing, from `1.` down to `0.`.
///
/// The position decreases by `1 / (n - 1)` at each step and is snapped
/// to exactly `0.` once it drops below `0.01`, so that floating point
/// residue never leaks into the last stop.
pub fn steps(n: usize) -> Steps {
    let dx = if n > 1 { 1. / (n - 1) as f64 } else { 1. };
    Steps { x: 1., dx, left: n }
}

/// Iterator over the easing positions of a scale, see [`steps`].
#[derive(Clone, Debug)]
pub struct Steps {
    x: f64,
    dx: f64,
    left: usize, // positions still to be yielded
}

impl Iterator for Steps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.left == 0 { return None }
        let x = self.x;
        self.left -= 1;
        self.x -= self.dx;
        if self.x < SNAP { self.x = 0. }
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl ExactSizeIterator for Steps {}

/// Map `v` from \[`a0`, `a1`\] to \[`b0`, `b1`\].
#[inline]
pub(crate) fn lerp(v: f64, a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    b0 + (v - a0) * (b1 - b0) / (a1 - a0)
}

/// Round to one decimal, the precision of every lightness value.
#[inline]
pub(crate) fn round1(v: f64) -> f64 { (v * 10.).round() / 10. }

// Tolerance absorbing the representation error of values that are
// already on a tenth (69.9 * 10 is not exactly 699).
const TENTH_EPS: f64 = 1e-6;

/// Largest tenth not above `v`.
#[inline]
pub(crate) fn floor1(v: f64) -> f64 { (v * 10. + TENTH_EPS).floor() / 10. }

/// Smallest tenth not below `v`.
#[inline]
pub(crate) fn ceil1(v: f64) -> f64 { (v * 10. - TENTH_EPS).ceil() / 10. }


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        for e in Easing::ALL {
            assert!(e.ease(0.).abs() < 1e-12, "{e}(0) = {}", e.ease(0.));
            assert!((e.ease(1.) - 1.).abs() < 1e-12, "{e}(1) = {}", e.ease(1.));
        }
    }

    #[test]
    fn monotonic() {
        for e in Easing::ALL {
            let mut prev = e.ease(0.);
            for i in 1 ..= 200 {
                let y = e.ease(i as f64 / 200.);
                assert!(y >= prev - 1e-12, "{e} decreases at {i}");
                prev = y;
            }
        }
    }

    #[test]
    fn ease_in_out_is_continuous_at_half() {
        for e in [Easing::EaseInOut, Easing::SlowEaseInOut,
                  Easing::FastEaseInOut] {
            assert!((e.ease(0.5 - 1e-9) - e.ease(0.5)).abs() < 1e-6);
            assert!((e.ease(0.5) - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn curve_shapes() {
        assert!(Easing::EaseIn.ease(0.5) < 0.5);
        assert!(Easing::EaseOut.ease(0.5) > 0.5);
        // Slow variants bend less than the regular ones.
        assert!(Easing::SlowEaseIn.ease(0.5) > Easing::EaseIn.ease(0.5));
        assert!((Easing::EaseIn.ease(0.25) - 0.125).abs() < 1e-12);
    }

    #[test]
    fn parse() {
        for e in Easing::ALL {
            assert_eq!(e.as_str().parse::<Easing>().unwrap(), e);
        }
        assert!(matches!("EASE_SIDEWAYS".parse::<Easing>(),
                         Err(Error::UnknownEasing(s)) if s == "EASE_SIDEWAYS"));
        assert!("linear".parse::<Easing>().is_err());
    }

    #[test]
    fn steps_descend_to_zero() {
        let xs: Vec<f64> = steps(10).collect();
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 1.);
        assert_eq!(xs[9], 0.);
        for w in xs.windows(2) {
            assert!((w[0] - w[1] - 1. / 9.).abs() < 1e-9);
        }
        assert_eq!(steps(24).len(), 24);
        assert_eq!(steps(0).count(), 0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round1(69.94), 69.9);
        assert_eq!(round1(24.05000001), 24.1);
        assert_eq!(lerp(0.5, 0., 1., 24., 96.), 60.);
        assert_eq!(floor1(70. - 0.15), 69.8);
        assert_eq!(floor1(70. - 0.1), 69.9);
        assert_eq!(ceil1(50. + 0.25), 50.3);
        assert_eq!(ceil1(50. + 0.1), 50.1);
    }
}
