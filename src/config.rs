//! Playback settings shared by synthesis and sequencing.

use crate::error::{Error, Result};

/// Sample rate used when none is given, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

/// Length of one note when none is given, in seconds.
pub const DEFAULT_DURATION: f64 = 1.0;

/// Amplitude scale when none is given (0..1).
pub const DEFAULT_VOLUME: f64 = 0.2;

/// How long, how loud and at which rate tones are rendered.
///
/// # Examples
///
/// ```
/// use toneplay::ToneSettings;
///
/// let settings = ToneSettings::default().with_duration(0.5);
/// assert_eq!(settings.sample_rate, 22050);
/// assert_eq!(settings.sample_count(), 11025);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSettings {
    /// Samples per second, also the clock of the audio sink
    pub sample_rate: u32,
    /// Length of each tone in seconds
    pub duration: f64,
    /// Amplitude scale applied before quantization
    pub volume: f64,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl ToneSettings {
    /// Creates validated settings.
    pub fn new(sample_rate: u32, duration: f64, volume: f64) -> Result<Self> {
        let settings = Self {
            sample_rate,
            duration,
            volume,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Rejects settings that cannot describe a tone.
    ///
    /// The sample rate must be non-zero, the duration positive and finite,
    /// and the volume finite. Volumes above 1.0 are allowed; quantization
    /// clips them.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidArgument(
                "sample rate must be greater than zero".to_string(),
            ));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        if !self.volume.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "volume must be finite, got {}",
                self.volume
            )));
        }
        Ok(())
    }

    /// Number of samples in one tone: `floor(sample_rate * duration)`.
    pub fn sample_count(&self) -> usize {
        (f64::from(self.sample_rate) * self.duration).floor() as usize
    }
}
