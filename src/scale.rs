//! Lightness scales.

use std::cmp::Ordering;
use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::easing::{ceil1, floor1, round1};
use crate::error::{Error, Result};
use crate::stop::{self, Stop, StopKey};

/// Lowest lightness.
pub const LIGHTNESS_MIN: f64 = 0.;
/// Highest lightness.
pub const LIGHTNESS_MAX: f64 = 100.;

/// A stop of a scale together with its lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entry {
    pub key: StopKey,
    /// Lightness in \[0, 100\], one decimal.
    pub lightness: f64,
}

/// Ordered mapping from stop keys to lightness values.
///
/// Entries keep the order in which they were inserted, which is the
/// order of the stops of the preset the scale was synthesized from.
/// Keys are pairwise distinct.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scale {
    entries: Vec<Entry>,
}

/// Positions, in the entry array, of the stops immediately above and
/// below a given stop by lightness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub above: Option<usize>,
    pub below: Option<usize>,
}

impl Scale {
    pub fn new() -> Self { Scale { entries: Vec::new() } }

    /// Number of stops.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Returns the entries in stop order.
    #[inline]
    pub fn entries(&self) -> &[Entry] { &self.entries }

    pub fn iter(&self) -> impl Iterator<Item = (StopKey, f64)> + '_ {
        self.entries.iter().map(|e| (e.key, e.lightness))
    }

    pub fn keys(&self) -> impl Iterator<Item = StopKey> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.lightness)
    }

    /// Stop numbers, in order.
    pub fn stops(&self) -> Vec<Stop> { self.keys().map(StopKey::stop).collect() }

    pub fn index_of(&self, key: StopKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn get(&self, key: StopKey) -> Option<f64> {
        self.index_of(key).map(|i| self.entries[i].lightness)
    }

    /// Insert `key`, or overwrite its lightness if already present.
    pub fn insert(&mut self, key: StopKey, lightness: f64) {
        match self.index_of(key) {
            Some(i) => self.entries[i].lightness = lightness,
            None => self.entries.push(Entry { key, lightness }),
        }
    }

    /// Overwrite the lightness of an existing stop.
    pub fn set(&mut self, key: StopKey, lightness: f64) -> Result<()> {
        let i = self.index_of(key)
            .ok_or_else(|| Error::UnknownStop(key.to_string()))?;
        self.entries[i].lightness = lightness;
        Ok(())
    }

    pub(crate) fn set_at(&mut self, i: usize, lightness: f64) {
        self.entries[i].lightness = lightness;
    }

    pub(crate) fn lightness_at(&self, i: usize) -> f64 {
        self.entries[i].lightness
    }

    /// Indices of the entries sorted from the lightest to the darkest.
    /// Equal values keep their stop order.
    pub fn ranked(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0 .. self.len()).collect();
        idx.sort_by(|&i, &j| {
            let (a, b) = (self.entries[i].lightness, self.entries[j].lightness);
            b.partial_cmp(&a).unwrap_or(Ordering::Equal).then(i.cmp(&j))
        });
        idx
    }

    /// Returns the stops just above and just below the stop at `index`.
    pub fn neighbors(&self, index: usize) -> Neighbors {
        let ranked = self.ranked();
        match ranked.iter().position(|&i| i == index) {
            Some(r) => Neighbors {
                above: r.checked_sub(1).map(|r| ranked[r]),
                below: ranked.get(r + 1).copied(),
            },
            None => Neighbors::default(),
        }
    }

    /// Interval in which the stop at `index` may move without getting
    /// closer than `gap` to its neighbors.  The lightest stop may go up
    /// to 100 and the darkest down to 0.  The interval always contains
    /// the current value.
    pub fn bounds(&self, index: usize, gap: f64) -> (f64, f64) {
        let Neighbors { above, below } = self.neighbors(index);
        let v = self.entries[index].lightness;
        let hi = match above {
            Some(j) => floor1(self.entries[j].lightness - gap),
            None => LIGHTNESS_MAX };
        let lo = match below {
            Some(j) => ceil1(self.entries[j].lightness + gap),
            None => LIGHTNESS_MIN };
        (lo.clamp(LIGHTNESS_MIN, v.max(LIGHTNESS_MIN)),
         hi.clamp(v.min(LIGHTNESS_MAX), LIGHTNESS_MAX))
    }

    /// Says whether no two stops are closer than `gap`.
    pub fn respects_gap(&self, gap: f64) -> bool {
        let ranked = self.ranked();
        ranked.windows(2).all(|w| {
            self.entries[w[0]].lightness - self.entries[w[1]].lightness
                >= gap - 1e-9
        })
    }

    /// Rebuild the scale from `values`, sorted from the lightest to the
    /// darkest, numbering the stops with `factor`.
    pub(crate) fn relabel(values: impl IntoIterator<Item = f64>,
                          factor: Stop) -> Scale {
        let mut values: Vec<f64> = values.into_iter().collect();
        values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        let entries = values.into_iter().enumerate()
            .map(|(i, lightness)| Entry {
                key: StopKey::new(stop::encode(i, factor)), lightness })
            .collect();
        Scale { entries }
    }
}

impl FromIterator<(StopKey, f64)> for Scale {
    fn from_iter<I: IntoIterator<Item = (StopKey, f64)>>(iter: I) -> Self {
        let mut scale = Scale::new();
        for (k, v) in iter { scale.insert(k, v) }
        scale
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.len()))?;
        for e in &self.entries {
            map.serialize_entry(&e.key, &round1(e.lightness))?;
        }
        map.end()
    }
}

struct ScaleVisitor;

impl<'de> Visitor<'de> for ScaleVisitor {
    type Value = Scale;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from “lightness-<n>” keys to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A)
                                    -> Result<Scale, A::Error> {
        let mut scale = Scale::new();
        while let Some((key, lightness)) = map.next_entry::<StopKey, f64>()? {
            scale.insert(key, lightness);
        }
        Ok(scale)
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_map(ScaleVisitor)
    }
}
