//! Stops, stop keys and naming conventions.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::error::Error;

/// Prefix of every stop key.
pub const KEY_PREFIX: &str = "lightness-";

/// Nominal shade number of a stop (e.g. 50, 300, 900).
pub type Stop = u32;

/// Key of a stop in a [`Scale`](crate::Scale), printed as
/// `lightness-<stop>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopKey(Stop);

impl StopKey {
    #[inline]
    pub fn new(stop: Stop) -> Self { StopKey(stop) }

    /// The shade number this key was built from.
    #[inline]
    pub fn stop(self) -> Stop { self.0 }
}

impl From<Stop> for StopKey {
    fn from(stop: Stop) -> Self { StopKey(stop) }
}

impl fmt::Display for StopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KEY_PREFIX}{}", self.0)
    }
}

impl FromStr for StopKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).map(StopKey)
    }
}

impl Serialize for StopKey {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StopKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Build the stop at position `index` for the naming `factor`.
#[inline]
pub fn encode(index: usize, factor: Stop) -> Stop {
    (index as Stop + 1) * factor
}

/// Parse the numeric suffix of a stop key such as `"lightness-300"`.
pub fn decode(key: &str) -> Result<Stop, Error> {
    key.strip_prefix(KEY_PREFIX)
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| Error::MalformedStopKey(key.to_string()))
}

/// Smallest stop number among `keys`, or `None` if there is no key.
///
/// Used as the increment when the stops of a scale are relabelled.
pub fn min_factor<I>(keys: I) -> Option<Stop>
where I: IntoIterator<Item = StopKey> {
    keys.into_iter().map(StopKey::stop).min()
}

/// How the stops of the Custom preset are numbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamingConvention {
    /// 1, 2, 3, …
    #[default]
    Ones,
    /// 10, 20, 30, …
    Tens,
    /// 100, 200, 300, …
    Hundreds,
}

impl NamingConvention {
    /// Multiplier applied to `index + 1`.
    pub fn factor(self) -> Stop {
        match self {
            NamingConvention::Ones => 1,
            NamingConvention::Tens => 10,
            NamingConvention::Hundreds => 100,
        }
    }

    /// The `n` stops numbered according to this convention.
    pub fn stops(self, n: usize) -> Vec<Stop> {
        (0 .. n).map(|i| encode(i, self.factor())).collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NamingConvention::Ones => "ONES",
            NamingConvention::Tens => "TENS",
            NamingConvention::Hundreds => "HUNDREDS",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use NamingConvention::*;
        [Ones, Tens, Hundreds].into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| Error::UnknownNamingConvention(s.to_string()))
    }
}
