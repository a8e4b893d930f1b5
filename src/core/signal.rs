//! Core signal processing traits.
//!
//! This module provides the fundamental `Signal` trait that represents
//! any sample source, and the `Pitched` trait for sources with a frequency.

/// Common interface for all signal sources.
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;
}

/// Anything with a pitch.
///
/// # Examples
///
/// ```
/// use toneplay::{Pitched, SineOscillator};
///
/// let osc = SineOscillator::new(440.0, 22050);
/// assert_eq!(osc.frequency(), 440.0);
/// ```
pub trait Pitched {
    /// Gets the frequency of the signal in Hz.
    fn frequency(&self) -> f64;
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }
}
