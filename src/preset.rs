//! Presets: named templates of stops with a lightness range.

use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};
use crate::catalogue::{self, ty::PresetData};
use crate::easing::Easing;
use crate::error::{Error, Result};
use crate::scale::{Scale, LIGHTNESS_MAX, LIGHTNESS_MIN};
use crate::stop::{NamingConvention, Stop};
use crate::synth::synthesize;

/// Identifier of the preset whose stops the user controls.
pub const CUSTOM_ID: &str = "CUSTOM";

/// A named, bounded template of stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    id: String,
    name: String,
    stops: Vec<Stop>,
    min: f64,
    max: f64,
    distributed: bool,
}

/// # Presets
impl Preset {
    fn from_data(p: &PresetData) -> Self {
        Preset { id: p.id.to_string(), name: p.name.to_string(),
                 stops: p.stops.clone(), min: p.min, max: p.max,
                 distributed: p.distributed }
    }

    pub fn id(&self) -> &str { &self.id }

    /// Human readable name.
    pub fn name(&self) -> &str { &self.name }

    /// The stops, from the lightest to the darkest.
    pub fn stops(&self) -> &[Stop] { &self.stops }

    /// Number of stops.
    pub fn len(&self) -> usize { self.stops.len() }

    /// Presets have at least 2 stops.
    pub fn is_empty(&self) -> bool { self.stops.is_empty() }

    /// Lightness of the darkest stop.
    pub fn min(&self) -> f64 { self.min }

    /// Lightness of the lightest stop.
    pub fn max(&self) -> f64 { self.max }

    /// Says whether lightness is spread along an easing (`true`) or
    /// taken from the stop numbers (`false`).
    pub fn is_distributed(&self) -> bool { self.distributed }

    /// Only the Custom preset may change its number of stops.
    pub fn is_custom(&self) -> bool { self.id == CUSTOM_ID }

    /// The easing this preset actually synthesizes with when `selected`
    /// is the user's choice.
    pub fn easing(&self, selected: Easing) -> Easing {
        if self.distributed { selected } else { Easing::None }
    }

    /// Synthesize the scale of this preset.
    pub fn synthesize(&self, selected: Easing) -> Result<Scale> {
        synthesize(&self.stops, self.min, self.max, self.easing(selected))
    }

    /// Change the lightness range.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<()> {
        if !(LIGHTNESS_MIN <= min && min <= max && max <= LIGHTNESS_MAX) {
            return Err(Error::InvalidBounds { min, max })
        }
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Replace the stops.  Only the number of stops of the Custom
    /// preset may change.
    pub(crate) fn set_stops(&mut self, stops: Vec<Stop>) -> Result<()> {
        if !self.is_custom() && stops.len() != self.stops.len() {
            return Err(Error::NotCustomPreset(self.id.clone()))
        }
        self.stops = stops;
        Ok(())
    }
}

/// Return all built-in presets, in menu order.
pub fn catalogue() -> impl Iterator<Item = Preset> {
    catalogue::ALL_PRESETS.iter().map(|&p| Preset::from_data(p))
}

/// Owner of the Custom preset; looks up the built-in ones.
#[derive(Clone, Debug)]
pub struct PresetManager {
    custom: Preset,
    naming: NamingConvention,
    stop_range: RangeInclusive<usize>,
}

impl PresetManager {
    /// The Custom preset starts from its catalogue template and may have
    /// a number of stops within `stop_range`.
    pub fn new(stop_range: RangeInclusive<usize>) -> Self {
        PresetManager { custom: Preset::from_data(&catalogue::CUSTOM),
                        naming: NamingConvention::Ones,
                        stop_range }
    }

    /// The preset selected by default.
    pub fn default_preset() -> Preset { Preset::from_data(&catalogue::MATERIAL) }

    /// Look a preset up by id.  The Custom preset is returned in its
    /// current state.
    pub fn get(&self, id: &str) -> Option<Preset> {
        if id == CUSTOM_ID { return Some(self.custom.clone()) }
        catalogue::ALL_PRESETS.iter()
            .find(|p| p.id == id)
            .map(|&p| Preset::from_data(p))
    }

    /// Returns the preset `id` (or the default one if `id` is unknown)
    /// together with its scale synthesized with `easing`.
    pub fn select_preset(&self, id: &str, easing: Easing)
                         -> Result<(Preset, Scale)> {
        let preset = self.get(id).unwrap_or_else(|| {
            log::warn!("Unknown preset {id:?}, falling back to the default");
            Self::default_preset()
        });
        let scale = preset.synthesize(easing)?;
        log::debug!("Selected preset {} ({} stops, {easing})",
                    preset.id, preset.len());
        Ok((preset, scale))
    }

    /// Current state of the Custom preset.
    pub fn custom(&self) -> &Preset { &self.custom }

    pub fn naming_convention(&self) -> NamingConvention { self.naming }

    /// Allowed number of stops of the Custom preset.
    pub fn stop_range(&self) -> &RangeInclusive<usize> { &self.stop_range }

    /// Says whether a stop can be added to the Custom preset.
    pub fn can_add(&self) -> bool {
        self.custom.len() < *self.stop_range.end()
    }

    /// Says whether a stop can be removed from the Custom preset.
    pub fn can_remove(&self) -> bool {
        self.custom.len() > *self.stop_range.start()
    }

    fn limit_error(&self) -> Error {
        Error::StopLimit { min: *self.stop_range.start(),
                           max: *self.stop_range.end() }
    }

    /// Set the stops of the Custom preset, rejecting counts outside the
    /// allowed range.
    pub fn set_custom_stops(&mut self, stops: Vec<Stop>) -> Result<&Preset> {
        if !self.stop_range.contains(&stops.len()) {
            return Err(self.limit_error())
        }
        self.custom.set_stops(stops)?;
        Ok(&self.custom)
    }

    /// Give the Custom preset `n` stops numbered with the current naming
    /// convention.
    pub fn set_custom_stop_count(&mut self, n: usize) -> Result<&Preset> {
        self.set_custom_stops(self.naming.stops(n))
    }

    /// Change the lightness range of the Custom preset.
    pub fn set_custom_bounds(&mut self, min: f64, max: f64) -> Result<&Preset> {
        self.custom.set_bounds(min, max)?;
        Ok(&self.custom)
    }

    /// Renumber the stops of the Custom preset, keeping their number.
    pub fn set_naming_convention(&mut self, naming: NamingConvention)
                                 -> &Preset {
        self.naming = naming;
        self.custom.stops = naming.stops(self.custom.len());
        &self.custom
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::stop::StopKey;

    #[test]
    fn catalogue_is_valid() {
        let all: Vec<Preset> = catalogue().collect();
        assert_eq!(all.len(), 11);
        assert_eq!(all[0].id(), "MATERIAL");
        for p in &all {
            assert!(p.synthesize(Easing::Linear).is_ok(), "{}", p.id());
        }
        assert_eq!(all.iter().filter(|p| p.is_custom()).count(), 1);
    }

    #[test]
    fn select_known_preset() {
        let m = PresetManager::new(2 ..= 24);
        let (p, s) = m.select_preset("TAILWIND", Easing::Linear).unwrap();
        assert_eq!(p.name(), "Tailwind, 50-950");
        assert_eq!(s.len(), 11);
        assert_eq!(s.get(StopKey::new(50)), Some(96.));
        assert_eq!(s.get(StopKey::new(950)), Some(16.));
    }

    #[test]
    fn unknown_preset_falls_back() {
        let m = PresetManager::new(2 ..= 24);
        let (p, _) = m.select_preset("NOPE", Easing::EaseIn).unwrap();
        assert_eq!(p.id(), "MATERIAL");
    }

    #[test]
    fn material_3_mirrors_stop_numbers() {
        let m = PresetManager::new(2 ..= 24);
        let (_, s) = m.select_preset("MATERIAL_3", Easing::EaseOut).unwrap();
        assert_eq!(s.get(StopKey::new(95)), Some(95.));
        assert_eq!(s.get(StopKey::new(0)), Some(0.));
    }

    #[test]
    fn custom_stop_count_bounds() {
        let mut m = PresetManager::new(2 ..= 24);
        m.set_naming_convention(NamingConvention::Tens);
        assert_eq!(m.set_custom_stop_count(5).unwrap().stops(),
                   &[10, 20, 30, 40, 50]);
        assert!(matches!(m.set_custom_stop_count(25),
                         Err(Error::StopLimit { min: 2, max: 24 })));
        assert!(matches!(m.set_custom_stop_count(1),
                         Err(Error::StopLimit { .. })));
        assert_eq!(m.custom().len(), 5);
        let (p, s) = m.select_preset(CUSTOM_ID, Easing::Linear).unwrap();
        assert_eq!(p.len(), 5);
        assert_eq!(s.get(StopKey::new(10)), Some(90.));
        assert_eq!(s.get(StopKey::new(50)), Some(10.));
    }

    #[test]
    fn built_in_stop_count_is_fixed() {
        let mut p = PresetManager::default_preset();
        assert!(matches!(p.set_stops(vec![1, 2, 3]),
                         Err(Error::NotCustomPreset(_))));
        assert!(p.set_bounds(30., 20.).is_err());
        p.set_bounds(10., 99.).unwrap();
        assert_eq!((p.min(), p.max()), (10., 99.));
    }
}
