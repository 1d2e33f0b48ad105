use serde::{Deserialize, Serialize};
use crate::scale::Scale;

/// What a structural change was about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    AddStop,
    RemoveStop,
    NamingConvention,
    DistributionEasing,
    Preset,
    /// Keyboard nudge of a single stop.
    Nudge,
}

/// Notification sent to the host after the scale changed.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    /// Live update during a drag.  May be debounced or dropped.
    Updating(Scale),
    /// End of a drag.  Must be delivered.
    Released(Scale),
    /// Discrete change of the scale.
    Shifted { scale: Scale, feature: Feature },
    /// Exact value typed by the user.
    Typed(Scale),
}

impl Signal {
    /// The scale after the change.
    pub fn scale(&self) -> &Scale {
        match self {
            Signal::Updating(s) | Signal::Released(s) | Signal::Typed(s)
                | Signal::Shifted { scale: s, .. } => s,
        }
    }

    /// Says whether the host should persist the scale now.  Only live
    /// drag updates may wait.
    pub fn is_durable(&self) -> bool { !matches!(self, Signal::Updating(_)) }
}
