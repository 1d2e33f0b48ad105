use crate::stop::StopKey;

/// Modifier keys held during a pointer or keyboard event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false,
                                            alt: false, meta: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ..Modifiers::NONE };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, ..Modifiers::NONE };
    pub const META: Modifiers = Modifiers { meta: true, ..Modifiers::NONE };

    /// Dragging the lightest or darkest stop redistributes the scale.
    #[inline]
    pub fn distribute(self) -> bool { self.shift }

    /// Dragging moves every stop together.
    #[inline]
    pub fn link(self) -> bool { self.ctrl || self.meta }

    /// Keyboard nudges use the fine step.
    #[inline]
    pub fn precise(self) -> bool { self.shift }
}

/// Keys the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Delete,
    Backspace,
    Other,
}

/// Input coming from the host UI.
///
/// Pointer positions are in pixels along the track, `width` being the
/// track length.  Position 0 is lightness 0 and position `width` is
/// lightness 100.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Pointer pressed on a stop.
    Grab { stop: StopKey, x: f64, width: f64 },
    /// Pointer moved while a stop is grabbed.
    Move { x: f64, modifiers: Modifiers },
    /// Pointer released, wherever it is.
    Release,
    /// Pointer pressed on the empty part of the track.
    TrackClick { x: f64, width: f64 },
    /// Key pressed while `stop` has the focus.
    Key { stop: StopKey, key: Key, modifiers: Modifiers },
    /// Double activation of a stop, opens its value field.
    DoubleClick { stop: StopKey },
    /// New content of the value field.
    Input(String),
    /// The value field lost the focus.
    Blur,
}
