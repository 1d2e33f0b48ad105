//! Interactive stop editing.
//!
//! [`StopEditor`] turns the pointer and keyboard events of the host UI
//! into changes of a [`Session`] scale and tells the host about them
//! with [`Signal`]s.  It is a small state machine:
//!
//! ```text
//! Idle ── Grab ──> Dragging ── Move ──> Dragging | Linking | Distributing
//!  ^                                         │
//!  └──────────────── Release ────────────────┘
//! Idle ── DoubleClick / Enter ──> Typing ── Enter / Blur / Escape ──> Idle
//! ```
//!
//! A `Release` is accepted in every state, so a lost pointer can never
//! leave the editor stuck in a drag.

mod event;
mod signal;

pub use event::{Event, Key, Modifiers};
pub use signal::{Feature, Signal};

use crate::easing::round1;
use crate::error::{Error, Result};
use crate::scale::{LIGHTNESS_MAX, LIGHTNESS_MIN};
use crate::session::Session;
use crate::stop::StopKey;

/// What the editor is currently doing, as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Moving a single stop.
    Dragging,
    /// Moving all stops together.
    Linking,
    /// Moving an extremity and redistributing the others.
    Distributing,
    /// Value field open.
    Typing,
}

/// A pointer drag in progress.
#[derive(Clone, Debug)]
struct Drag {
    stop: StopKey,
    /// Pointer position when the stop was grabbed.
    origin_x: f64,
    /// Lightness of the stop when it was grabbed.
    origin: f64,
    /// Track length, in pixels.
    width: f64,
    /// Clamp interval computed from the neighbors.
    bounds: (f64, f64),
    phase: Phase,
}

impl Drag {
    /// Lightness under the pointer at `x`, unclamped.
    fn target(&self, x: f64) -> f64 {
        self.origin + (x - self.origin_x) / self.width * 100.
    }
}

#[derive(Clone, Debug)]
enum State {
    Idle,
    Dragging(Drag),
    Typing { stop: StopKey, text: String },
}

/// Gesture state machine.  One per edited session.
#[derive(Clone, Debug)]
pub struct StopEditor {
    state: State,
}

impl Default for StopEditor {
    fn default() -> Self { Self::new() }
}

/// Says whether the error comes from an action the UI should not have
/// offered (the affordance is disabled).
fn is_rejection(e: &Error) -> bool {
    matches!(e, Error::StopLimit { .. } | Error::NotCustomPreset(_))
}

impl StopEditor {
    pub fn new() -> Self { StopEditor { state: State::Idle } }

    pub fn phase(&self) -> Phase {
        match &self.state {
            State::Idle => Phase::Idle,
            State::Dragging(d) => d.phase,
            State::Typing { .. } => Phase::Typing,
        }
    }

    /// Content of the value field while typing.
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            State::Typing { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The stop being dragged or typed into.
    pub fn active_stop(&self) -> Option<StopKey> {
        match &self.state {
            State::Idle => None,
            State::Dragging(d) => Some(d.stop),
            State::Typing { stop, .. } => Some(*stop),
        }
    }

    /// Process one event of the host UI.
    ///
    /// Adding or removing stops beyond the limits, or outside the Custom
    /// preset, is logged and ignored.  Grabbing a stop while another
    /// gesture is running is an error.
    pub fn handle(&mut self, session: &mut Session, event: Event)
                  -> Result<Option<Signal>> {
        let res = match event {
            Event::Grab { stop, x, width } => self.grab(session, stop, x, width),
            Event::Move { x, modifiers } => self.drag(session, x, modifiers),
            Event::Release => Ok(self.release(session)),
            Event::TrackClick { x, width } => self.click(session, x, width),
            Event::Key { stop, key, modifiers } =>
                self.key(session, stop, key, modifiers),
            Event::DoubleClick { stop } => self.begin_typing(session, stop),
            Event::Input(text) => {
                if let State::Typing { text: t, .. } = &mut self.state {
                    *t = text;
                }
                Ok(None)
            }
            Event::Blur => self.confirm_typing(session),
        };
        match res {
            Err(e) if is_rejection(&e) => {
                log::warn!("Rejected edit: {e}");
                Ok(None)
            }
            res => res,
        }
    }

    fn grab(&mut self, session: &mut Session, stop: StopKey, x: f64,
            width: f64) -> Result<Option<Signal>> {
        if !matches!(self.state, State::Idle) {
            log::warn!("Grab of {stop} while a gesture is in progress");
            return Err(Error::GestureInProgress)
        }
        if !x.is_finite() {
            log::trace!("Grab of {stop} at {x}, ignored");
            return Ok(None)
        }
        let origin = session.scale().get(stop)
            .ok_or_else(|| Error::UnknownStop(stop.to_string()))?;
        let bounds = session.bounds(stop)?;
        let width = if width > 0. && width.is_finite() { width } else { 1. };
        log::debug!("Grabbed {stop} at {origin}, bounds {bounds:?}");
        self.state = State::Dragging(Drag { stop, origin_x: x, origin, width,
                                            bounds, phase: Phase::Dragging });
        Ok(None)
    }

    fn drag(&mut self, session: &mut Session, x: f64, modifiers: Modifiers)
            -> Result<Option<Signal>> {
        let drag = match &mut self.state {
            State::Dragging(d) => d,
            _ => return Ok(None),
        };
        if !x.is_finite() {
            log::trace!("Pointer at {x}, frame dropped");
            return Ok(None)
        }
        let target = drag.target(x);
        let end = session.end_of(drag.stop);
        let distribute = modifiers.distribute() && end.is_some()
            && session.effective_easing().is_curve();
        if modifiers.link() {
            drag.phase = Phase::Linking;
            let current = session.scale().get(drag.stop)
                .ok_or_else(|| Error::UnknownStop(drag.stop.to_string()))?;
            let delta = round1(target - current);
            if delta == 0. || !session.shift_all(delta) {
                log::trace!("Link by {delta} out of range, frame dropped");
                return Ok(None)
            }
            drag.bounds = session.bounds(drag.stop)?;
        } else if let (true, Some(end)) = (distribute, end) {
            drag.phase = Phase::Distributing;
            if !session.distribute(end, target)? { return Ok(None) }
            drag.bounds = session.bounds(drag.stop)?;
        } else {
            drag.phase = Phase::Dragging;
            let (lo, hi) = drag.bounds;
            let v = session.move_stop(drag.stop, target.clamp(lo, hi))?;
            log::trace!("Dragged {} to {v}", drag.stop);
        }
        Ok(Some(Signal::Updating(session.scale().clone())))
    }

    fn release(&mut self, session: &Session) -> Option<Signal> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Dragging(d) => {
                log::debug!("Released {} ({:?})", d.stop, d.phase);
                Some(Signal::Released(session.scale().clone()))
            }
            State::Typing { stop, text } => {
                // The value field keeps the focus.
                self.state = State::Typing { stop, text };
                None
            }
            State::Idle => None,
        }
    }

    fn click(&mut self, session: &mut Session, x: f64, width: f64)
             -> Result<Option<Signal>> {
        if !matches!(self.state, State::Idle)
            || !(x.is_finite() && width.is_finite() && width > 0.) {
            return Ok(None)
        }
        let lightness = (x / width * 100.).clamp(LIGHTNESS_MIN, LIGHTNESS_MAX);
        session.add_stop(lightness).map(Some)
    }

    fn key(&mut self, session: &mut Session, stop: StopKey, key: Key,
           modifiers: Modifiers) -> Result<Option<Signal>> {
        match (self.phase(), key) {
            (Phase::Typing, Key::Enter) => self.confirm_typing(session),
            (Phase::Typing, Key::Escape) => {
                log::debug!("Typing cancelled");
                self.state = State::Idle;
                Ok(None)
            }
            (Phase::Typing | Phase::Dragging | Phase::Linking
             | Phase::Distributing, _) => Ok(None),
            (Phase::Idle, Key::Enter) => self.begin_typing(session, stop),
            (Phase::Idle, Key::Delete | Key::Backspace) =>
                session.remove_stop(stop).map(Some),
            (Phase::Idle, Key::ArrowLeft | Key::ArrowRight
                          | Key::ArrowUp | Key::ArrowDown) => {
                let config = session.config();
                let step = if modifiers.precise() { config.fine_step }
                           else { config.step };
                let delta = match key {
                    Key::ArrowLeft | Key::ArrowDown => -step,
                    _ => step };
                session.nudge(stop, delta).map(Some)
            }
            (Phase::Idle, Key::Escape | Key::Other) => Ok(None),
        }
    }

    fn begin_typing(&mut self, session: &Session, stop: StopKey)
                    -> Result<Option<Signal>> {
        if !matches!(self.state, State::Idle) { return Ok(None) }
        let v = session.scale().get(stop)
            .ok_or_else(|| Error::UnknownStop(stop.to_string()))?;
        self.state = State::Typing { stop, text: format!("{v:.1}") };
        Ok(None)
    }

    fn confirm_typing(&mut self, session: &mut Session)
                      -> Result<Option<Signal>> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Typing { stop, text } =>
                session.type_value(stop, &text).map(Some),
            other => {
                self.state = other;
                Ok(None)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::config::EditorConfig;

    fn session() -> Session { Session::new(EditorConfig::default()).unwrap() }

    fn key(s: u32) -> StopKey { StopKey::new(s) }

    fn grab(ed: &mut StopEditor, s: &mut Session, stop: u32) {
        let v = s.scale().get(key(stop)).unwrap();
        ed.handle(s, Event::Grab { stop: key(stop), x: v * 10., width: 1000. })
            .unwrap();
    }

    fn move_to(ed: &mut StopEditor, s: &mut Session, x: f64, m: Modifiers)
               -> Option<Signal> {
        ed.handle(s, Event::Move { x, modifiers: m }).unwrap()
    }

    #[test]
    fn drag_updates_then_releases() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 500); // 56, between 64 and 48
        assert_eq!(ed.phase(), Phase::Dragging);
        let sig = move_to(&mut ed, &mut s, 600., Modifiers::NONE).unwrap();
        assert!(matches!(sig, Signal::Updating(_)));
        assert_eq!(sig.scale().get(key(500)), Some(60.));
        move_to(&mut ed, &mut s, 900., Modifiers::NONE);
        assert_eq!(s.scale().get(key(500)), Some(63.9));
        let sig = ed.handle(&mut s, Event::Release).unwrap().unwrap();
        assert!(matches!(sig, Signal::Released(_)) && sig.is_durable());
        assert_eq!(ed.phase(), Phase::Idle);
    }

    #[test]
    fn extreme_stops_reach_absolute_bounds() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 50);
        move_to(&mut ed, &mut s, 1500., Modifiers::NONE);
        assert_eq!(s.scale().get(key(50)), Some(100.));
        ed.handle(&mut s, Event::Release).unwrap();
        grab(&mut ed, &mut s, 900);
        move_to(&mut ed, &mut s, -300., Modifiers::NONE);
        assert_eq!(s.scale().get(key(900)), Some(0.));
    }

    #[test]
    fn second_grab_is_refused() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 500);
        let res = ed.handle(&mut s, Event::Grab { stop: key(600), x: 0.,
                                                  width: 1000. });
        assert!(matches!(res, Err(Error::GestureInProgress)));
        assert_eq!(ed.active_stop(), Some(key(500)));
    }

    #[test]
    fn release_when_idle_is_harmless() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        assert_eq!(ed.handle(&mut s, Event::Release).unwrap(), None);
        assert_eq!(move_to(&mut ed, &mut s, 10., Modifiers::NONE), None);
    }

    #[test]
    fn link_moves_everything() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 500);
        move_to(&mut ed, &mut s, 590., Modifiers::CTRL);
        assert_eq!(ed.phase(), Phase::Linking);
        assert_eq!(s.scale().get(key(50)), Some(99.));
        assert_eq!(s.scale().get(key(500)), Some(59.));
        assert_eq!(s.scale().get(key(900)), Some(27.));
        // 50 would go past 100: the whole frame is dropped.
        assert_eq!(move_to(&mut ed, &mut s, 620., Modifiers::META), None);
        assert_eq!(s.scale().get(key(500)), Some(59.));
    }

    #[test]
    fn distribute_from_the_top() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 50);
        move_to(&mut ed, &mut s, 870., Modifiers::SHIFT);
        assert_eq!(ed.phase(), Phase::Distributing);
        assert_eq!(s.preset().max(), 87.);
        assert_eq!(s.scale().get(key(50)), Some(87.));
        assert_eq!(s.scale().get(key(900)), Some(24.));
        let sig = ed.handle(&mut s, Event::Release).unwrap().unwrap();
        assert!(matches!(sig, Signal::Released(_)));
    }

    #[test]
    fn distribute_never_collapses_the_scale() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 50);
        move_to(&mut ed, &mut s, 0., Modifiers::SHIFT);
        assert_eq!(ed.phase(), Phase::Distributing);
        assert!(s.scale().respects_gap(s.config().safety_gap),
                "{:?}", s.scale().values().collect::<Vec<_>>());
        assert_eq!(s.scale().get(key(900)), Some(24.));
        assert!(s.preset().max() > 24.);
        ed.handle(&mut s, Event::Release).unwrap();
        assert!(s.scale().respects_gap(s.config().safety_gap));
    }

    #[test]
    fn shift_on_an_undistributed_preset_is_a_plain_drag() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        s.select_preset("MATERIAL_3").unwrap();
        grab(&mut ed, &mut s, 0);
        move_to(&mut ed, &mut s, 50., Modifiers::SHIFT);
        assert_eq!(ed.phase(), Phase::Dragging);
        assert_eq!(s.scale().get(key(0)), Some(5.));
        move_to(&mut ed, &mut s, 300., Modifiers::SHIFT);
        assert_eq!(s.scale().get(key(0)), Some(9.9));
        assert_eq!((s.preset().min(), s.preset().max()), (0., 100.));
        assert_eq!(s.scale().get(key(100)), Some(100.));
    }

    #[test]
    fn non_finite_pointer_is_ignored() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 500);
        assert_eq!(move_to(&mut ed, &mut s, f64::NAN, Modifiers::NONE), None);
        assert_eq!(move_to(&mut ed, &mut s, f64::INFINITY, Modifiers::CTRL),
                   None);
        assert_eq!(s.scale().get(key(500)), Some(56.));
        ed.handle(&mut s, Event::Release).unwrap();
        s.select_preset("CUSTOM").unwrap();
        let click = Event::TrackClick { x: f64::NAN, width: 1000. };
        assert_eq!(ed.handle(&mut s, click).unwrap(), None);
        assert_eq!(s.scale().len(), 2);
    }

    #[test]
    fn shift_on_a_middle_stop_is_a_plain_drag() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        grab(&mut ed, &mut s, 500);
        move_to(&mut ed, &mut s, 580., Modifiers::SHIFT);
        assert_eq!(ed.phase(), Phase::Dragging);
        assert_eq!(s.scale().get(key(500)), Some(58.));
        assert_eq!(s.preset().max(), 96.);
    }

    #[test]
    fn keyboard_nudges() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        let k = |key| Event::Key { stop: StopKey::new(500), key,
                                   modifiers: Modifiers::NONE };
        ed.handle(&mut s, k(Key::ArrowRight)).unwrap();
        assert_eq!(s.scale().get(key(500)), Some(57.));
        ed.handle(&mut s, Event::Key { stop: key(500), key: Key::ArrowLeft,
                                       modifiers: Modifiers::SHIFT }).unwrap();
        assert_eq!(s.scale().get(key(500)), Some(56.9));
        for _ in 0 .. 20 { ed.handle(&mut s, k(Key::ArrowUp)).unwrap(); }
        assert_eq!(s.scale().get(key(500)), Some(63.9));
    }

    #[test]
    fn typing_commit_and_cancel() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        ed.handle(&mut s, Event::DoubleClick { stop: key(500) }).unwrap();
        assert_eq!(ed.phase(), Phase::Typing);
        assert_eq!(ed.text(), Some("56.0"));
        ed.handle(&mut s, Event::Input("50.5".into())).unwrap();
        let enter = Event::Key { stop: key(500), key: Key::Enter,
                                 modifiers: Modifiers::NONE };
        let sig = ed.handle(&mut s, enter.clone()).unwrap().unwrap();
        assert!(matches!(sig, Signal::Typed(_)));
        assert_eq!(s.scale().get(key(500)), Some(50.5));

        ed.handle(&mut s, enter).unwrap();
        ed.handle(&mut s, Event::Input("10".into())).unwrap();
        let esc = Event::Key { stop: key(500), key: Key::Escape,
                               modifiers: Modifiers::NONE };
        assert_eq!(ed.handle(&mut s, esc).unwrap(), None);
        assert_eq!(s.scale().get(key(500)), Some(50.5));
        assert_eq!(ed.phase(), Phase::Idle);
    }

    #[test]
    fn blur_confirms() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        ed.handle(&mut s, Event::DoubleClick { stop: key(900) }).unwrap();
        ed.handle(&mut s, Event::Input("not a number".into())).unwrap();
        let sig = ed.handle(&mut s, Event::Blur).unwrap().unwrap();
        assert_eq!(sig.scale().get(key(900)), Some(24.));
    }

    #[test]
    fn structural_rejections_are_dropped() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        let before = s.scale().clone();
        let click = Event::TrackClick { x: 500., width: 1000. };
        assert_eq!(ed.handle(&mut s, click).unwrap(), None);
        let del = Event::Key { stop: key(500), key: Key::Delete,
                               modifiers: Modifiers::NONE };
        assert_eq!(ed.handle(&mut s, del).unwrap(), None);
        assert_eq!(s.scale(), &before);
    }

    #[test]
    fn click_adds_on_custom() {
        let (mut ed, mut s) = (StopEditor::new(), session());
        s.select_preset("CUSTOM").unwrap();
        let click = Event::TrackClick { x: 333., width: 1000. };
        let sig = ed.handle(&mut s, click).unwrap().unwrap();
        assert!(matches!(sig, Signal::Shifted { feature: Feature::AddStop, .. }));
        assert_eq!(s.scale().values().collect::<Vec<_>>(), vec![90., 33.3, 10.]);
        let del = Event::Key { stop: key(2), key: Key::Backspace,
                               modifiers: Modifiers::NONE };
        ed.handle(&mut s, del).unwrap();
        assert_eq!(s.scale().values().collect::<Vec<_>>(), vec![90., 10.]);
    }
}
