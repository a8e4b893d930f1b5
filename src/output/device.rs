//! Playback through the system's default audio device using cpal.
//!
//! cpal pulls samples from a callback on its own thread. Each sink feeds that
//! callback through a bounded queue holding one second of audio, so `write`
//! blocks once the device falls behind and playback is paced by the
//! hardware clock.

use std::thread;
use std::time::{Duration, Instant};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample};
use crossbeam_channel::{Receiver, SendTimeoutError, Sender, bounded};
use log::{debug, trace, warn};

use super::{AudioSink, SinkConfig, SinkFactory};
use crate::error::{Error, Result};
use crate::synthesis::pcm::{self, SILENCE};

/// How often `close` checks whether the queue has drained.
const DRAIN_POLL: Duration = Duration::from_millis(10);

/// Extra time `close` allows beyond the queued audio before giving up.
const DRAIN_GRACE: Duration = Duration::from_secs(2);

/// How long `write` waits for room in a full queue before giving up.
const WRITE_STALL: Duration = Duration::from_secs(2);

fn device_error(err: impl std::fmt::Display) -> Error {
    Error::Device(err.to_string())
}

/// Opens streams on a cpal output device.
pub struct DeviceOutput {
    device: cpal::Device,
}

impl DeviceOutput {
    /// Uses the default output device of the default host.
    pub fn default_device() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Device("no output device available".to_string()))?;
        debug!(
            "using output device '{}' on {:?}",
            device.name().unwrap_or_else(|_| "unknown".to_string()),
            host.id()
        );
        Ok(Self::new(device))
    }

    pub fn new(device: cpal::Device) -> Self {
        Self { device }
    }
}

impl SinkFactory for DeviceOutput {
    type Sink = DeviceSink;

    fn open(&mut self, config: &SinkConfig) -> Result<DeviceSink> {
        let (stream_config, sample_format) = select_config(&self.device, config)?;
        let (sender, receiver) = bounded(config.sample_rate as usize);

        let stream = match sample_format {
            SampleFormat::U8 => build_stream::<u8>(&self.device, &stream_config, receiver)?,
            SampleFormat::I16 => build_stream::<i16>(&self.device, &stream_config, receiver)?,
            SampleFormat::U16 => build_stream::<u16>(&self.device, &stream_config, receiver)?,
            SampleFormat::F32 => build_stream::<f32>(&self.device, &stream_config, receiver)?,
            sample_format => {
                return Err(Error::Device(format!(
                    "unsupported sample format: {}",
                    sample_format
                )));
            }
        };
        stream.play().map_err(device_error)?;
        debug!(
            "opened output stream: {} Hz, {} channel(s), {}",
            stream_config.sample_rate.0, stream_config.channels, sample_format
        );

        Ok(DeviceSink {
            stream: Some(stream),
            sender,
            sample_rate: config.sample_rate,
        })
    }
}

/// Picks a device configuration that runs at the requested rate,
/// preferring the requested channel count and then native 8-bit samples.
fn select_config(
    device: &cpal::Device,
    config: &SinkConfig,
) -> Result<(cpal::StreamConfig, SampleFormat)> {
    let rate = cpal::SampleRate(config.sample_rate);
    let mut ranges: Vec<_> = device
        .supported_output_configs()
        .map_err(device_error)?
        .filter(|range| range.min_sample_rate() <= rate && rate <= range.max_sample_rate())
        .collect();
    ranges.sort_by_key(|range| {
        config_preference(config.channels, range.channels(), range.sample_format())
    });

    let range = ranges.into_iter().next().ok_or_else(|| {
        Error::Device(format!(
            "no output configuration supports {} Hz",
            config.sample_rate
        ))
    })?;
    let supported = range.with_sample_rate(rate);
    Ok((supported.config(), supported.sample_format()))
}

/// Sort key for device configurations: the requested channel count first,
/// then native 8-bit samples, then fewer channels.
fn config_preference(
    requested_channels: u16,
    channels: u16,
    sample_format: SampleFormat,
) -> (bool, bool, u16) {
    (
        channels != requested_channels,
        sample_format != SampleFormat::U8,
        channels,
    )
}

/// Fills interleaved `data` from the queue, repeating each sample on every
/// channel and filling with silence when the queue runs dry.
fn fill_frames<T>(data: &mut [T], channels: usize, receiver: &Receiver<u8>)
where
    T: SizedSample + FromSample<f32>,
{
    for frame in data.chunks_mut(channels) {
        let sample = receiver.try_recv().unwrap_or(SILENCE);
        let value = T::from_sample(pcm::to_f32(sample));
        for s in frame.iter_mut() {
            *s = value;
        }
    }
}

/// Queues samples for the callback, failing if the queue stays full for
/// longer than `stall`.
fn queue_samples(sender: &Sender<u8>, samples: &[u8], stall: Duration) -> Result<()> {
    for &sample in samples {
        sender
            .send_timeout(sample, stall)
            .map_err(|err| match err {
                SendTimeoutError::Timeout(_) => Error::Device(format!(
                    "output stream stalled with {} samples queued",
                    sender.len()
                )),
                SendTimeoutError::Disconnected(_) => {
                    Error::Device("output stream disconnected".to_string())
                }
            })?;
    }
    Ok(())
}

/// Builds a stream that plays queued samples through [`fill_frames`].
fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    receiver: Receiver<u8>,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                fill_frames(data, channels, &receiver)
            },
            |err| warn!("audio stream error: {}", err),
            None,
        )
        .map_err(device_error)
}

/// One open device stream.
///
/// Dropping the sink without closing it stops the stream immediately,
/// discarding whatever is still queued.
pub struct DeviceSink {
    stream: Option<cpal::Stream>,
    sender: Sender<u8>,
    sample_rate: u32,
}

impl DeviceSink {
    /// Waits until the callback has taken every queued sample.
    fn drain(&self) -> Result<()> {
        let queued =
            Duration::from_secs_f64(self.sender.len() as f64 / f64::from(self.sample_rate));
        let deadline = Instant::now() + queued + DRAIN_GRACE;
        while !self.sender.is_empty() {
            if Instant::now() > deadline {
                return Err(Error::Device(format!(
                    "output stream stalled with {} samples queued",
                    self.sender.len()
                )));
            }
            thread::sleep(DRAIN_POLL);
        }
        // the last samples are in the device buffer now
        thread::sleep(DRAIN_POLL);
        Ok(())
    }
}

impl AudioSink for DeviceSink {
    fn write(&mut self, samples: &[u8]) -> Result<()> {
        if self.stream.is_none() {
            return Err(Error::Device("write to a closed stream".to_string()));
        }
        trace!("queueing {} samples", samples.len());
        queue_samples(&self.sender, samples, WRITE_STALL)
    }

    fn close(&mut self) -> Result<()> {
        if self.stream.is_none() {
            return Ok(());
        }
        let drained = self.drain();
        if let Some(stream) = self.stream.take() {
            if let Err(err) = stream.pause() {
                warn!("could not pause output stream: {}", err);
            }
        }
        debug!("closed output stream");
        drained
    }
}

impl Drop for DeviceSink {
    fn drop(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.pause();
        }
    }
}
