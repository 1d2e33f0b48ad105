//! Lightness scales and their interactive edition.
//!
//! A lightness scale maps named stops (shade numbers such as 50, 100,
//! …, 900, keyed `lightness-<n>`) to a perceptual lightness in
//! \[0, 100\].
//!
//! - [`synthesize`] spreads lightness over the stops of a [`Preset`]
//!   along an [`Easing`] curve.
//! - [`StopEditor`] turns pointer and keyboard [`Event`]s into edits of
//!   a [`Session`] (drag, link, distribute, nudge, typed values,
//!   added and removed stops) and reports them as [`Signal`]s.
//! - [`PresetManager`] knows the built-in presets and owns the Custom
//!   one, whose stops follow a [`NamingConvention`].
//!
//! # Example
//!
//! ```
//! use lightness_scale::{EditorConfig, Event, Modifiers, Session,
//!                       Signal, StopEditor, StopKey};
//! let mut session = Session::new(EditorConfig::default()).unwrap();
//! let mut editor = StopEditor::new();
//! let stop = StopKey::new(500);
//! // Track of 1000 pixels: one pixel is 0.1 of lightness.
//! editor.handle(&mut session,
//!               Event::Grab { stop, x: 560., width: 1000. }).unwrap();
//! editor.handle(&mut session,
//!               Event::Move { x: 600., modifiers: Modifiers::NONE }).unwrap();
//! let released = editor.handle(&mut session, Event::Release).unwrap();
//! assert!(matches!(released, Some(Signal::Released(_))));
//! assert_eq!(session.scale().get(stop), Some(60.));
//! ```

mod catalogue;
pub mod config;
pub mod easing;
pub mod editor;
pub mod error;
pub mod preset;
pub mod scale;
pub mod session;
pub mod stop;
pub mod synth;

pub use config::EditorConfig;
pub use easing::{Curve, Easing};
pub use editor::{Event, Feature, Key, Modifiers, Phase, Signal, StopEditor};
pub use error::{Error, Result};
pub use preset::{catalogue, Preset, PresetManager, CUSTOM_ID};
pub use scale::{Entry, Scale};
pub use session::{End, Session};
pub use stop::{NamingConvention, Stop, StopKey};
pub use synth::synthesize;
