//! 8-bit unsigned PCM quantization.

/// The mid-scale value, i.e. a zero amplitude.
pub const SILENCE: u8 = 0x80;

/// Maps an amplitude in [-1, 1] to an unsigned 8-bit sample.
///
/// The value is `round(amplitude * 127 + 128)` clamped to 0..=255, so
/// out-of-range amplitudes clip instead of wrapping.
///
/// # Examples
///
/// ```
/// use toneplay::synthesis::pcm::quantize;
///
/// assert_eq!(quantize(0.0), 128);
/// assert_eq!(quantize(1.0), 255);
/// assert_eq!(quantize(-1.0), 1);
/// ```
pub fn quantize(amplitude: f64) -> u8 {
    (amplitude * 127.0 + 128.0).round().clamp(0.0, 255.0) as u8
}

/// Converts a quantized sample back to a float in [-1, 1) for device output.
pub fn to_f32(sample: u8) -> f32 {
    (f32::from(sample) - 128.0) / 128.0
}
