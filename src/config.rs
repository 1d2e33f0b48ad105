//! Editor configuration.
//!
//! All fields have defaults, so an empty YAML document is a valid
//! configuration:
//!
//! ```yaml
//! safety_gap: 0.1
//! step: 1.0
//! fine_step: 0.1
//! min_stops: 2
//! max_stops: 24
//! easing: LINEAR
//! preset: MATERIAL
//! ```

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::easing::Easing;
use crate::error::{Error, Result};

/// Tunables of a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum distance kept between two neighboring stops while
    /// editing interactively.
    pub safety_gap: f64,
    /// Keyboard nudge.
    pub step: f64,
    /// Keyboard nudge with the precision modifier held.
    pub fine_step: f64,
    /// Fewest stops the Custom preset may have.
    pub min_stops: usize,
    /// Most stops the Custom preset may have.
    pub max_stops: usize,
    /// Distribution easing selected when the session starts.
    pub easing: Easing,
    /// Preset selected when the session starts.
    pub preset: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            safety_gap: 0.1,
            step: 1.,
            fine_step: 0.1,
            min_stops: 2,
            max_stops: 24,
            easing: Easing::Linear,
            preset: "MATERIAL".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: EditorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the YAML configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_yaml(&fs::read_to_string(path)?)?;
        log::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.safety_gap > 0. && self.safety_gap < 50.) {
            return Err(Error::Config(format!(
                "safety_gap must be in (0, 50), got {}", self.safety_gap)))
        }
        if !(self.step > 0. && self.fine_step > 0.) {
            return Err(Error::Config(format!(
                "steps must be positive, got {} and {}",
                self.step, self.fine_step)))
        }
        if self.min_stops < 2 || self.min_stops > self.max_stops {
            return Err(Error::Config(format!(
                "stop count range {}..={} is empty or below 2",
                self.min_stops, self.max_stops)))
        }
        Ok(())
    }

    /// Allowed number of stops of the Custom preset.
    #[inline]
    pub fn stop_range(&self) -> RangeInclusive<usize> {
        self.min_stops ..= self.max_stops
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EditorConfig::from_yaml("{}").unwrap(),
                   EditorConfig::default());
    }

    #[test]
    fn partial_override() {
        let c = EditorConfig::from_yaml("safety_gap: 0.5\neasing: SLOW_EASE_OUT\n")
            .unwrap();
        assert_eq!(c.safety_gap, 0.5);
        assert_eq!(c.easing, Easing::SlowEaseOut);
        assert_eq!(c.max_stops, 24);
    }

    #[test]
    fn unknown_easing_is_rejected() {
        assert!(matches!(EditorConfig::from_yaml("easing: WOBBLE"),
                         Err(Error::Yaml(_))));
    }

    #[test]
    fn invalid_values() {
        for yaml in ["safety_gap: 0", "safety_gap: -1", "step: 0",
                     "min_stops: 1", "min_stops: 10\nmax_stops: 5"] {
            assert!(matches!(EditorConfig::from_yaml(yaml),
                             Err(Error::Config(_))), "{yaml} accepted");
        }
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("lightness-scale-config-{}.yaml", std::process::id()));
        fs::write(&path, "max_stops: 12\npreset: CARBON\n").unwrap();
        let c = EditorConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(c.stop_range(), 2 ..= 12);
        assert_eq!(c.preset, "CARBON");
        assert!(matches!(EditorConfig::load(&path), Err(Error::Io(_))));
    }
}
