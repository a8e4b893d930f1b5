//! Oscillator implementations for tone synthesis.
//!
//! This module contains the `Oscillator` trait, the sine and sawtooth
//! oscillators, and the `Waveform` selector used by the sequencer.

mod sawtooth;
mod sine;
mod traits;

pub use sawtooth::SawtoothOscillator;
pub use sine::SineOscillator;
pub use traits::Oscillator;

/// The waveform shape used to render a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Pure sine wave
    Sine,
    /// Rising sawtooth ramp
    #[default]
    Saw,
}

impl Waveform {
    /// Creates a boxed oscillator of this shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use toneplay::{Signal, Waveform};
    ///
    /// let mut osc = Waveform::Saw.oscillator(440.0, 22050);
    /// assert_eq!(osc.next_sample(), -1.0);
    /// ```
    pub fn oscillator(self, frequency: f64, sample_rate: u32) -> Box<dyn Oscillator + Send> {
        match self {
            Waveform::Sine => Box::new(SineOscillator::new(frequency, sample_rate)),
            Waveform::Saw => Box::new(SawtoothOscillator::new(frequency, sample_rate)),
        }
    }
}
