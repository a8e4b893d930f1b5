//! Frequency type for representing pitch in Hz.

use std::iter::Sum;
use std::ops::Add;

/// A frequency value in Hz.
///
/// Frequencies add up, which is how chord tones are formed from the note
/// table: the tone is played at the sum of its members.
///
/// # Examples
///
/// ```
/// use toneplay::music::frequency::Frequency;
///
/// let freq: Frequency = 440.0.into();
/// assert_eq!(freq.as_f64(), 440.0);
///
/// let chord = Frequency::from_hz(261.6) + Frequency::from_hz(329.6);
/// assert!((chord.as_f64() - 591.2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from Hz.
    pub fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Returns the frequency value in Hz.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl Add for Frequency {
    type Output = Frequency;

    fn add(self, other: Frequency) -> Frequency {
        Frequency(self.0 + other.0)
    }
}

impl Sum for Frequency {
    fn sum<I: Iterator<Item = Frequency>>(iter: I) -> Self {
        iter.fold(Frequency::default(), |acc, freq| acc + freq)
    }
}
