//! Tone synthesis components.
//!
//! This module provides:
//! - Oscillators (sine, sawtooth) and the `Waveform` selector
//! - 8-bit unsigned PCM quantization
//! - `Tone`, the finite sample stream rendered for one note

pub mod oscillators;
pub mod pcm;
mod tone;

pub use oscillators::{Oscillator, SawtoothOscillator, SineOscillator, Waveform};
pub use tone::{Tone, synthesize_saw, synthesize_sine};
