//! Editing session: the preset and scale being edited.
//!
//! A [`Session`] owns everything an edit touches.  Whole-scale
//! operations (preset, easing and naming changes, redistribution) go
//! through the synthesizer, single stop operations write the scale
//! directly.

use crate::config::EditorConfig;
use crate::easing::{round1, Easing};
use crate::editor::{Feature, Signal};
use crate::error::{Error, Result};
use crate::preset::{Preset, PresetManager};
use crate::scale::{Scale, LIGHTNESS_MAX, LIGHTNESS_MIN};
use crate::stop::{self, NamingConvention, StopKey};
use crate::synth::synthesize;

/// Extremity of a scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    /// The lightest stop, whose lightness is the preset `max`.
    Top,
    /// The darkest stop, whose lightness is the preset `min`.
    Bottom,
}

/// One palette being edited.
#[derive(Clone, Debug)]
pub struct Session {
    config: EditorConfig,
    presets: PresetManager,
    preset: Preset,
    scale: Scale,
    easing: Easing,
}

impl Session {
    /// Start a session on the configured preset and easing.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let presets = PresetManager::new(config.stop_range());
        let (preset, scale) = presets.select_preset(&config.preset,
                                                    config.easing)?;
        let easing = config.easing;
        Ok(Session { config, presets, preset, scale, easing })
    }

    pub fn config(&self) -> &EditorConfig { &self.config }

    pub fn preset(&self) -> &Preset { &self.preset }

    pub fn scale(&self) -> &Scale { &self.scale }

    /// The distribution easing selected by the user.
    pub fn easing(&self) -> Easing { self.easing }

    pub fn presets(&self) -> &PresetManager { &self.presets }

    pub fn naming_convention(&self) -> NamingConvention {
        self.presets.naming_convention()
    }

    /// The easing the current preset synthesizes with.
    pub fn effective_easing(&self) -> Easing {
        self.preset.easing(self.easing)
    }

    fn shifted(&self, feature: Feature) -> Signal {
        Signal::Shifted { scale: self.scale.clone(), feature }
    }

    fn resynthesize(&mut self) -> Result<()> {
        self.scale = synthesize(self.preset.stops(), self.preset.min(),
                                self.preset.max(), self.effective_easing())?;
        Ok(())
    }

    fn index(&self, key: StopKey) -> Result<usize> {
        self.scale.index_of(key)
            .ok_or_else(|| Error::UnknownStop(key.to_string()))
    }

    fn ensure_custom(&self) -> Result<()> {
        if self.preset.is_custom() { Ok(()) }
        else { Err(Error::NotCustomPreset(self.preset.id().to_string())) }
    }

    /// Switch to the preset `id` (or the default one when unknown).
    pub fn select_preset(&mut self, id: &str) -> Result<Signal> {
        let (preset, scale) = self.presets.select_preset(id, self.easing)?;
        self.preset = preset;
        self.scale = scale;
        Ok(self.shifted(Feature::Preset))
    }

    /// Change the distribution easing and resynthesize.
    pub fn set_easing(&mut self, easing: Easing) -> Result<Signal> {
        self.easing = easing;
        self.resynthesize()?;
        log::debug!("Distribution easing set to {easing}");
        Ok(self.shifted(Feature::DistributionEasing))
    }

    /// Renumber the stops of the Custom preset and resynthesize.
    pub fn set_naming_convention(&mut self, naming: NamingConvention)
                                 -> Result<Signal> {
        self.ensure_custom()?;
        self.preset = self.presets.set_naming_convention(naming).clone();
        self.resynthesize()?;
        log::debug!("Naming convention set to {naming}");
        Ok(self.shifted(Feature::NamingConvention))
    }

    /// Make the scale of the current preset the new stop list after
    /// add/remove, keeping the Custom preset of the manager in sync.
    fn commit_stops(&mut self, scale: Scale) -> Result<()> {
        let preset = self.presets.set_custom_stops(scale.stops())?;
        self.preset = preset.clone();
        self.scale = scale;
        Ok(())
    }

    /// Insert a stop of lightness `lightness` in the Custom preset.  The
    /// stops are sorted by lightness and renumbered.
    pub fn add_stop(&mut self, lightness: f64) -> Result<Signal> {
        self.ensure_custom()?;
        if !lightness.is_finite() { return Err(Error::InvalidLightness(lightness)) }
        if !self.presets.can_add() {
            let range = self.presets.stop_range();
            return Err(Error::StopLimit { min: *range.start(),
                                          max: *range.end() })
        }
        let lightness = round1(lightness.clamp(LIGHTNESS_MIN, LIGHTNESS_MAX));
        let factor = stop::min_factor(self.scale.keys())
            .unwrap_or(self.naming_convention().factor());
        let values = self.scale.values().chain(std::iter::once(lightness));
        let scale = Scale::relabel(values, factor);
        self.commit_stops(scale)?;
        log::debug!("Added stop at {lightness}, {} stops", self.scale.len());
        Ok(self.shifted(Feature::AddStop))
    }

    /// Remove the stop `key` from the Custom preset and renumber.
    pub fn remove_stop(&mut self, key: StopKey) -> Result<Signal> {
        self.ensure_custom()?;
        let index = self.index(key)?;
        if !self.presets.can_remove() {
            let range = self.presets.stop_range();
            return Err(Error::StopLimit { min: *range.start(),
                                          max: *range.end() })
        }
        let factor = stop::min_factor(self.scale.keys())
            .unwrap_or(self.naming_convention().factor());
        let values = self.scale.entries().iter().enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, e)| e.lightness);
        let scale = Scale::relabel(values, factor);
        self.commit_stops(scale)?;
        log::debug!("Removed {key}, {} stops", self.scale.len());
        Ok(self.shifted(Feature::RemoveStop))
    }

    /// Interval the stop `key` may be moved in.
    pub fn bounds(&self, key: StopKey) -> Result<(f64, f64)> {
        Ok(self.scale.bounds(self.index(key)?, self.config.safety_gap))
    }

    /// Which extremity of the scale `key` is, if any.
    pub fn end_of(&self, key: StopKey) -> Option<End> {
        let index = self.scale.index_of(key)?;
        let ranked = self.scale.ranked();
        if ranked.first() == Some(&index) { Some(End::Top) }
        else if ranked.last() == Some(&index) { Some(End::Bottom) }
        else { None }
    }

    /// Move `key` to `lightness`, clamped to its bounds.  Returns the
    /// value written.
    pub fn move_stop(&mut self, key: StopKey, lightness: f64) -> Result<f64> {
        if !lightness.is_finite() { return Err(Error::InvalidLightness(lightness)) }
        let index = self.index(key)?;
        let (lo, hi) = self.scale.bounds(index, self.config.safety_gap);
        let v = round1(lightness.clamp(lo, hi)).clamp(lo, hi);
        self.scale.set_at(index, v);
        Ok(v)
    }

    /// Keyboard nudge of `key` by `delta`, never crossing the neighbors
    /// closer than the safety gap.
    pub fn nudge(&mut self, key: StopKey, delta: f64) -> Result<Signal> {
        let index = self.index(key)?;
        let v = self.scale.lightness_at(index) + delta;
        let v = self.move_stop(key, v)?;
        log::trace!("Nudged {key} to {v}");
        Ok(self.shifted(Feature::Nudge))
    }

    /// Set `key` to the value typed in `text`.  Out of range values are
    /// clamped to the stop bounds, unparsable text keeps the current
    /// value.
    pub fn type_value(&mut self, key: StopKey, text: &str) -> Result<Signal> {
        let index = self.index(key)?;
        let current = self.scale.lightness_at(index);
        let v = match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                log::debug!("Ignoring non numeric value {text:?} for {key}");
                current
            }
        };
        let v = self.move_stop(key, v)?;
        log::debug!("Typed {v} for {key}");
        Ok(Signal::Typed(self.scale.clone()))
    }

    /// Add `delta` to every stop.  Nothing moves, and `false` is
    /// returned, if a stop would leave \[0, 100\].
    pub fn shift_all(&mut self, delta: f64) -> bool {
        let delta = round1(delta);
        let fits = self.scale.values()
            .all(|v| (LIGHTNESS_MIN ..= LIGHTNESS_MAX).contains(&round1(v + delta)));
        if !fits { return false }
        for i in 0 .. self.scale.len() {
            let v = self.scale.lightness_at(i);
            self.scale.set_at(i, round1(v + delta));
        }
        true
    }

    /// Use `lightness` as the new `max` (for [`End::Top`]) or `min` (for
    /// [`End::Bottom`]) of the preset and resynthesize the whole scale.
    ///
    /// The moved extremity is pushed away from the other one until the
    /// synthesized stops are at least the safety gap apart.  When no
    /// position in \[0, 100\] achieves that, nothing changes and `false`
    /// is returned.
    pub fn distribute(&mut self, end: End, lightness: f64) -> Result<bool> {
        if !lightness.is_finite() { return Err(Error::InvalidLightness(lightness)) }
        let (min, max) = (self.preset.min(), self.preset.max());
        let (mut v, step) = match end {
            End::Top => (round1(lightness).clamp(min, LIGHTNESS_MAX), 0.1),
            End::Bottom => (round1(lightness).clamp(LIGHTNESS_MIN, max), -0.1),
        };
        let easing = self.effective_easing();
        loop {
            let (min, max) = match end {
                End::Top => (min, v),
                End::Bottom => (v, max),
            };
            let scale = synthesize(self.preset.stops(), min, max, easing)?;
            if scale.respects_gap(self.config.safety_gap) {
                self.preset.set_bounds(min, max)?;
                if self.preset.is_custom() {
                    self.presets.set_custom_bounds(min, max)?;
                }
                self.scale = scale;
                return Ok(true)
            }
            v = round1(v + step);
            if !(LIGHTNESS_MIN ..= LIGHTNESS_MAX).contains(&v) {
                log::trace!("No room to distribute {} stops", self.scale.len());
                return Ok(false)
            }
        }
    }
}
