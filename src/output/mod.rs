//! Audio sinks that accept quantized 8-bit samples.
//!
//! A [`SinkFactory`] opens one [`AudioSink`] per note. The sink takes raw
//! unsigned 8-bit mono samples and must be closed once the note has been
//! written; closing blocks until the audio has been handed off.

#[cfg(feature = "device")]
pub mod device;
mod memory;

pub use memory::{MemoryOutput, MemorySink, Recording};

use crate::error::Result;

/// Format of the stream a sink is opened with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Number of interleaved channels
    pub channels: u16,
    /// Bytes per sample
    pub sample_width: u16,
}

impl SinkConfig {
    /// Mono, unsigned 8-bit output at `sample_rate`.
    pub fn mono_u8(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: 1,
            sample_width: 1,
        }
    }
}

/// An open output stream.
pub trait AudioSink {
    /// Writes samples, blocking until the sink has room for them.
    fn write(&mut self, samples: &[u8]) -> Result<()>;

    /// Stops the stream and releases it. Closing twice is a no-op.
    fn close(&mut self) -> Result<()>;
}

/// Opens output streams.
pub trait SinkFactory {
    type Sink: AudioSink;

    fn open(&mut self, config: &SinkConfig) -> Result<Self::Sink>;
}

impl<F: SinkFactory + ?Sized> SinkFactory for &mut F {
    type Sink = F::Sink;

    fn open(&mut self, config: &SinkConfig) -> Result<Self::Sink> {
        (**self).open(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_u8() {
        let config = SinkConfig::mono_u8(22050);
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.channels, 1);
        assert_eq!(config.sample_width, 1);
    }

    #[test]
    fn test_factory_by_reference() {
        fn open_twice<F: SinkFactory>(mut factory: F) {
            let config = SinkConfig::mono_u8(8000);
            factory.open(&config).unwrap().close().unwrap();
            factory.open(&config).unwrap().close().unwrap();
        }

        let mut output = MemoryOutput::new();
        open_twice(&mut output);
        assert_eq!(output.recordings().len(), 2);
    }
}
