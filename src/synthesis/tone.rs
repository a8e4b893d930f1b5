//! Finite, quantized sample streams for a single note.

use super::oscillators::{Oscillator, SawtoothOscillator, SineOscillator, Waveform};
use super::pcm::quantize;
use crate::config::ToneSettings;
use crate::core::Signal;
use crate::error::{Error, Result};

/// A lazily generated, non-restartable stream of 8-bit samples.
///
/// Produces `floor(sample_rate * duration)` samples, each the source signal
/// scaled by `volume` and quantized with [`quantize`].
///
/// # Examples
///
/// ```
/// use toneplay::synthesize_sine;
///
/// let tone = synthesize_sine(0.0, 1.0, 1.0, 10).unwrap();
/// assert_eq!(tone.collect::<Vec<u8>>(), vec![128; 10]);
/// ```
#[derive(Debug, Clone)]
pub struct Tone<S> {
    signal: S,
    volume: f64,
    remaining: usize,
}

impl<S: Signal> Tone<S> {
    /// Wraps `signal` into a tone described by `settings`.
    pub fn new(signal: S, settings: &ToneSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            signal,
            volume: settings.volume,
            remaining: settings.sample_count(),
        })
    }
}

impl<S: Signal> Iterator for Tone<S> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(quantize(self.volume * self.signal.next_sample()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Signal> ExactSizeIterator for Tone<S> {}

fn check_frequency(frequency: f64) -> Result<()> {
    if !frequency.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "frequency must be finite, got {frequency}"
        )));
    }
    Ok(())
}

/// Renders a sine tone.
pub fn synthesize_sine(
    frequency: f64,
    duration: f64,
    volume: f64,
    sample_rate: u32,
) -> Result<Tone<SineOscillator>> {
    check_frequency(frequency)?;
    let settings = ToneSettings::new(sample_rate, duration, volume)?;
    Tone::new(SineOscillator::new(frequency, sample_rate), &settings)
}

/// Renders a sawtooth tone.
pub fn synthesize_saw(
    frequency: f64,
    duration: f64,
    volume: f64,
    sample_rate: u32,
) -> Result<Tone<SawtoothOscillator>> {
    check_frequency(frequency)?;
    let settings = ToneSettings::new(sample_rate, duration, volume)?;
    Tone::new(SawtoothOscillator::new(frequency, sample_rate), &settings)
}

impl Waveform {
    /// Renders a tone of this shape at `frequency` Hz.
    pub fn synthesize(
        self,
        frequency: f64,
        settings: &ToneSettings,
    ) -> Result<Tone<Box<dyn Oscillator + Send>>> {
        check_frequency(frequency)?;
        Tone::new(self.oscillator(frequency, settings.sample_rate), settings)
    }
}
