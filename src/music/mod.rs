//! Notes, scales and the tone sequencer.

pub mod frequency;
pub mod notes;
pub mod scale;
mod sequencer;

pub use frequency::Frequency;
pub use scale::build_scale;
pub use sequencer::{CHORD_OFFSETS, Sequencer, chord_at};
