//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::core::{Pitched, Signal};
use std::f64::consts::PI;

/// A sine wave oscillator.
///
/// Sample `t` is `sin(2π · frequency · t / sample_rate)`. The value is
/// computed from the step counter rather than an accumulated phase, so the
/// same inputs always yield bit-identical output.
#[derive(Debug, Clone)]
pub struct SineOscillator {
    /// Frequency in Hz
    frequency: f64,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Index of the next sample
    step: u64,
}

impl SineOscillator {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use toneplay::{Signal, SineOscillator};
    ///
    /// // A4 at the default 22.05 kHz sample rate
    /// let mut osc = SineOscillator::new(440.0, 22050);
    /// assert_eq!(osc.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            sample_rate: f64::from(sample_rate),
            step: 0,
        }
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        let t = self.step as f64;
        self.step += 1;
        (2.0 * PI * self.frequency * t / self.sample_rate).sin()
    }
}

impl Pitched for SineOscillator {
    fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Oscillator for SineOscillator {}
