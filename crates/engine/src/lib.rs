//! Jump-to-visible-location engine.
//!
//! The user types a literal needle; every occurrence in the visible text is
//! highlighted and tagged with a short label, and typing a label moves the
//! cursor there. The pipeline is three pure stages driven by a keystroke
//! state machine:
//!
//! * [`locate`] finds case-insensitive literal occurrences in the visible ranges.
//! * [`assign_labels`] hands out the shortest unique labels that cannot be
//!   confused with the text following each match.
//! * [`resolve_placements`] decides where each label is drawn.
//! * [`JumpController`] owns the [`Session`] and interprets keystrokes.
//!
//! Hosts plug in through the [`Document`] and [`Presenter`] traits.

pub mod controller;
pub mod document;
pub mod label;
pub mod locate;
pub mod placement;
pub mod presenter;
pub mod session;

pub use acejump_config::{Alphabet, JumpConfig, PlacementMode};
pub use acejump_primitives::{Position, Range, Selection};
pub use controller::{JumpController, JumpEvent, JumpMode};
pub use document::{Document, RopeDocument};
pub use label::{Label, LabelSpaceExhausted, assign_labels};
pub use locate::{Located, MatchInfo, locate};
pub use placement::{LabelPlacement, resolve_placements};
pub use presenter::{LastFrame, Presenter, RenderFrame};
pub use session::{LabeledMatch, Overflow, Session};
