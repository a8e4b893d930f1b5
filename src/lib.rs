//! Toneplay - 8-bit tone synthesis and note sequencing.
//!
//! This library renders sine and sawtooth tones as unsigned 8-bit mono PCM
//! and plays note sequences through an audio sink, one stream per note.

pub mod config;
pub mod core;
pub mod error;
#[cfg(feature = "music")]
pub mod music;
pub mod output;
#[cfg(feature = "synth")]
pub mod synthesis;

// Re-export commonly used types at the crate root
pub use config::ToneSettings;
pub use crate::core::{Pitched, Signal};
pub use error::{Error, Result};
#[cfg(feature = "music")]
pub use music::{Frequency, Sequencer, build_scale};
pub use output::{AudioSink, MemoryOutput, SinkConfig, SinkFactory};
#[cfg(feature = "synth")]
pub use synthesis::{
    Oscillator, SawtoothOscillator, SineOscillator, Tone, Waveform, synthesize_saw,
    synthesize_sine,
};
