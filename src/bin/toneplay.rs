//! Plays a hardcoded tone program on the default audio device.
//!
//! Change `PROGRAM` to pick what is played. Set `RUST_LOG=debug` to see
//! each note as it starts.

use anyhow::Result;
use log::info;
use toneplay::music::Sequencer;
use toneplay::output::device::DeviceOutput;
use toneplay::{ToneSettings, Waveform, build_scale};

/// What the binary plays.
#[allow(dead_code)]
enum Program {
    /// A melody string, one sawtooth note per letter
    Melody(&'static str),
    /// The major scale starting on a note
    Scale(&'static str),
    /// Random chord tones drawn from the major scale starting on a note
    Randomized { base: &'static str, steps: usize },
    /// A single tone repeated forever
    Drone { frequency: f64, waveform: Waveform },
}

const PROGRAM: Program = Program::Randomized {
    base: "c+",
    steps: 16,
};

fn main() -> Result<()> {
    env_logger::init();

    let settings = ToneSettings::default();
    let mut sequencer = Sequencer::new(DeviceOutput::default_device()?, settings)?;
    info!(
        "sample rate {} Hz, {} s per note, volume {}",
        settings.sample_rate, settings.duration, settings.volume
    );

    match PROGRAM {
        Program::Melody(melody) => sequencer.play_melody(melody)?,
        Program::Scale(base) => sequencer.play_sequence(&build_scale(base)?, Waveform::Saw)?,
        Program::Randomized { base, steps } => {
            let scale = build_scale(base)?;
            sequencer.randomize_sequence(&scale, steps, &mut rand::thread_rng())?
        }
        Program::Drone {
            frequency,
            waveform,
        } => loop {
            sequencer.play_tone(frequency.into(), waveform)?;
        },
    }

    Ok(())
}
