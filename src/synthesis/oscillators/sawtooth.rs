//! Sawtooth wave oscillator implementation.

use super::Oscillator;
use crate::core::{Pitched, Signal};

/// A sawtooth wave oscillator.
///
/// Sample `t` is `((t · frequency / sample_rate) mod 2) - 1`: a linear ramp
/// from -1.0 up towards 1.0 that drops back to -1.0 every
/// `2 · sample_rate / frequency` samples.
#[derive(Debug, Clone)]
pub struct SawtoothOscillator {
    /// Frequency in Hz
    frequency: f64,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Index of the next sample
    step: u64,
}

impl SawtoothOscillator {
    /// Creates a new sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sawtooth wave in Hz
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(frequency: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            sample_rate: f64::from(sample_rate),
            step: 0,
        }
    }
}

impl Signal for SawtoothOscillator {
    fn next_sample(&mut self) -> f64 {
        let t = self.step as f64;
        self.step += 1;
        (t * self.frequency / self.sample_rate).rem_euclid(2.0) - 1.0
    }
}

impl Pitched for SawtoothOscillator {
    fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl Oscillator for SawtoothOscillator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_creation() {
        let osc = SawtoothOscillator::new(440.0, 22050);
        assert_eq!(osc.frequency(), 440.0);
    }

    #[test]
    fn test_starts_at_minus_one() {
        let mut osc = SawtoothOscillator::new(440.0, 22050);
        assert_eq!(osc.next_sample(), -1.0);
    }

    #[test]
    fn test_ramp_values() {
        // 1 Hz at 4 samples per second climbs by 0.25 per step and wraps after 8
        let mut osc = SawtoothOscillator::new(1.0, 4);
        let samples: Vec<f64> = (0..9).map(|_| osc.next_sample()).collect();
        assert_eq!(
            samples,
            vec![-1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, -1.0]
        );
    }

    #[test]
    fn test_negative_frequency_stays_in_range() {
        let mut osc = SawtoothOscillator::new(-440.0, 22050);
        for _ in 0..1000 {
            let sample = osc.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_sample_range() {
        let mut osc = SawtoothOscillator::new(1085.3, 22050);
        for _ in 0..22050 {
            let sample = osc.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_zero_frequency() {
        let mut osc = SawtoothOscillator::new(0.0, 22050);
        let sample1 = osc.next_sample();
        let sample2 = osc.next_sample();
        assert_eq!(sample1, sample2);
    }
}
