//! Note sequencer that renders one tone per note to an audio sink.
//!
//! Every note gets its own stream: the sink is opened, the tone is written in
//! chunks of one second, the leftover fraction of a second is written as
//! silence, and the sink is closed before the next note starts. Reopening the
//! stream per note leaves a short audible gap between notes.

use log::{debug, info, trace};
use rand::Rng;

use super::frequency::Frequency;
use super::notes::{parse_melody, resolve};
use crate::config::ToneSettings;
use crate::error::{Error, Result};
use crate::output::{AudioSink, SinkConfig, SinkFactory};
use crate::synthesis::Waveform;
use crate::synthesis::pcm::SILENCE;

/// Offsets, within the note sequence, of the notes summed into a random chord tone.
pub const CHORD_OFFSETS: [usize; 3] = [0, 2, 4];

/// Plays note sequences through a [`SinkFactory`].
///
/// # Examples
///
/// ```
/// use toneplay::music::Sequencer;
/// use toneplay::output::MemoryOutput;
/// use toneplay::{ToneSettings, Waveform};
///
/// let output = MemoryOutput::new();
/// let settings = ToneSettings::default().with_sample_rate(8000);
/// let mut sequencer = Sequencer::new(output.clone(), settings).unwrap();
///
/// sequencer.play_sequence(&["c", "e", "g"], Waveform::Sine).unwrap();
///
/// // one stream per note, each closed after its second of audio
/// let recordings = output.recordings();
/// assert_eq!(recordings.len(), 3);
/// assert!(recordings.iter().all(|r| r.closed && r.samples().len() == 8000));
/// ```
#[derive(Debug)]
pub struct Sequencer<F> {
    output: F,
    settings: ToneSettings,
}

impl<F: SinkFactory> Sequencer<F> {
    /// Creates a sequencer writing to `output`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `settings` do not validate.
    pub fn new(output: F, settings: ToneSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { output, settings })
    }

    /// Plays a single tone on a freshly opened stream.
    ///
    /// Only whole chunks of `sample_rate` samples are written from the tone;
    /// the remaining `n_samples % sample_rate` samples are replaced by
    /// silence. The stream is closed even when a write fails.
    pub fn play_tone(&mut self, frequency: Frequency, waveform: Waveform) -> Result<()> {
        let tone = waveform.synthesize(frequency.as_f64(), &self.settings)?;
        let config = SinkConfig::mono_u8(self.settings.sample_rate);

        let mut sink = self.output.open(&config)?;
        debug!(
            "playing {:?} at {:.1} Hz for {} s",
            waveform,
            frequency.as_f64(),
            self.settings.duration
        );
        let written = write_chunked(&mut sink, tone, self.settings.sample_rate as usize);
        let closed = sink.close();
        written.and(closed)
    }

    /// Plays each note of `notes` in order.
    ///
    /// All names are looked up before anything is played, so an unknown name
    /// fails the call without producing sound.
    pub fn play_sequence<S: AsRef<str>>(&mut self, notes: &[S], waveform: Waveform) -> Result<()> {
        let frequencies = resolve(notes)?;
        info!("playing {} notes as {:?}", notes.len(), waveform);
        for (name, frequency) in notes.iter().zip(frequencies) {
            debug!("note '{}'", name.as_ref());
            self.play_tone(frequency, waveform)?;
        }
        Ok(())
    }

    /// Plays a melody string such as `"cccedddfeeddc"` with sawtooth tones.
    pub fn play_melody(&mut self, melody: &str) -> Result<()> {
        let notes = parse_melody(melody)?;
        self.play_sequence(&notes, Waveform::Saw)
    }

    /// Plays `steps` random chord tones drawn from `notes`.
    ///
    /// Each step picks a uniformly random index into `notes` and plays a
    /// sawtooth at the summed frequency of the notes at [`CHORD_OFFSETS`]
    /// from it, wrapping around the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownNote` for names missing from the note table, and
    /// `Error::InvalidArgument` if `steps` is non-zero and `notes` is empty.
    pub fn randomize_sequence<S, R>(&mut self, notes: &[S], steps: usize, rng: &mut R) -> Result<()>
    where
        S: AsRef<str>,
        R: Rng,
    {
        if steps == 0 {
            return Ok(());
        }
        if notes.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot draw random notes from an empty sequence".to_string(),
            ));
        }

        let frequencies = resolve(notes)?;
        info!("playing {} random chord tones over {} notes", steps, notes.len());
        for step in 0..steps {
            let index = rng.gen_range(0..frequencies.len());
            let frequency = chord_at(&frequencies, index);
            debug!("step {}: chord on '{}'", step, notes[index].as_ref());
            self.play_tone(frequency, Waveform::Saw)?;
        }
        Ok(())
    }
}

/// Sum of the frequencies at [`CHORD_OFFSETS`] from `index`, wrapping.
///
/// # Panics
///
/// Panics if `frequencies` is empty.
///
/// # Examples
///
/// ```
/// use toneplay::music::chord_at;
/// use toneplay::music::frequency::Frequency;
///
/// let freqs: Vec<Frequency> = [100.0, 200.0, 300.0].into_iter().map(Frequency::from).collect();
/// // indices 2, 4 % 3 = 1, 6 % 3 = 0
/// assert_eq!(chord_at(&freqs, 2).as_f64(), 600.0);
/// ```
pub fn chord_at(frequencies: &[Frequency], index: usize) -> Frequency {
    CHORD_OFFSETS
        .iter()
        .map(|offset| frequencies[(index + offset) % frequencies.len()])
        .sum()
}

/// Writes whole chunks of `samples` followed by a silence pad of the
/// leftover length.
fn write_chunked<K, I>(sink: &mut K, mut samples: I, chunk_size: usize) -> Result<()>
where
    K: AudioSink,
    I: ExactSizeIterator<Item = u8>,
{
    let pad = samples.len() % chunk_size;
    let mut buffer = Vec::with_capacity(chunk_size.min(samples.len()));
    loop {
        buffer.clear();
        buffer.extend(samples.by_ref().take(chunk_size));
        if buffer.len() < chunk_size {
            break;
        }
        trace!("writing chunk of {} samples", buffer.len());
        sink.write(&buffer)?;
    }

    if pad > 0 {
        buffer.clear();
        buffer.resize(pad, SILENCE);
        trace!("writing {} samples of silence", pad);
        sink.write(&buffer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::scale::build_scale;
    use crate::output::MemoryOutput;
    use crate::synthesis::synthesize_saw;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sequencer(sample_rate: u32, duration: f64) -> (MemoryOutput, Sequencer<MemoryOutput>) {
        let output = MemoryOutput::new();
        let settings = ToneSettings::default()
            .with_sample_rate(sample_rate)
            .with_duration(duration);
        let sequencer = Sequencer::new(output.clone(), settings).unwrap();
        (output, sequencer)
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = ToneSettings::default().with_duration(0.0);
        assert!(matches!(
            Sequencer::new(MemoryOutput::new(), settings),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_one_stream_per_note() {
        let (output, mut sequencer) = sequencer(100, 1.0);
        sequencer
            .play_sequence(&["a", "b", "c", "d"], Waveform::Saw)
            .unwrap();

        let recordings = output.recordings();
        assert_eq!(recordings.len(), 4);
        for recording in &recordings {
            assert!(recording.closed);
            assert_eq!(recording.config, SinkConfig::mono_u8(100));
        }
    }

    #[test]
    fn test_whole_seconds_have_no_pad() {
        let (output, mut sequencer) = sequencer(100, 3.0);
        sequencer.play_sequence(&["a"], Waveform::Sine).unwrap();

        let recording = &output.recordings()[0];
        assert_eq!(recording.writes.len(), 3);
        assert!(recording.writes.iter().all(|w| w.len() == 100));
    }

    #[test]
    fn test_remainder_replaced_by_silence() {
        let (output, mut sequencer) = sequencer(100, 2.5);
        sequencer.play_sequence(&["a"], Waveform::Saw).unwrap();

        let recording = &output.recordings()[0];
        assert_eq!(recording.writes.len(), 3);
        assert_eq!(recording.writes[0].len(), 100);
        assert_eq!(recording.writes[1].len(), 100);
        assert_eq!(recording.writes[2], vec![SILENCE; 50]);

        let expected: Vec<u8> = synthesize_saw(440.0, 2.5, 0.2, 100)
            .unwrap()
            .take(200)
            .collect();
        assert_eq!(recording.samples()[..200], expected[..]);
    }

    #[test]
    fn test_short_note_is_all_silence() {
        let (output, mut sequencer) = sequencer(100, 0.5);
        sequencer.play_sequence(&["a"], Waveform::Sine).unwrap();

        let recording = &output.recordings()[0];
        assert_eq!(recording.writes, vec![vec![SILENCE; 50]]);
    }

    #[test]
    fn test_unknown_note_plays_nothing() {
        let (output, mut sequencer) = sequencer(100, 1.0);
        let result = sequencer.play_sequence(&["a", "h", "b"], Waveform::Saw);

        assert_eq!(result, Err(Error::UnknownNote("h".to_string())));
        assert!(output.recordings().is_empty());
    }

    #[test]
    fn test_non_finite_frequency_opens_no_stream() {
        let (output, mut sequencer) = sequencer(100, 1.0);
        for hz in [f64::NAN, f64::INFINITY] {
            let result = sequencer.play_tone(Frequency::from_hz(hz), Waveform::Sine);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
        assert!(output.recordings().is_empty());
    }

    #[test]
    fn test_stream_closed_when_write_fails() {
        let output = MemoryOutput::with_write_limit(1);
        let settings = ToneSettings::default()
            .with_sample_rate(100)
            .with_duration(2.0);
        let mut sequencer = Sequencer::new(output.clone(), settings).unwrap();

        let result = sequencer.play_sequence(&["a", "b"], Waveform::Saw);

        assert!(matches!(result, Err(Error::Device(_))));
        let recordings = output.recordings();
        assert_eq!(recordings.len(), 1);
        assert!(recordings[0].closed);
    }

    #[test]
    fn test_play_melody() {
        let (output, mut sequencer) = sequencer(100, 1.0);
        sequencer.play_melody("cccedddfeeddc").unwrap();
        assert_eq!(output.recordings().len(), 13);
    }

    #[test]
    fn test_randomize_zero_steps_writes_nothing() {
        let (output, mut sequencer) = sequencer(100, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [&str; 0] = [];

        sequencer.randomize_sequence(&empty, 0, &mut rng).unwrap();
        sequencer
            .randomize_sequence(&build_scale("c+").unwrap(), 0, &mut rng)
            .unwrap();

        assert!(output.recordings().is_empty());
        assert_eq!(output.write_count(), 0);
    }

    #[test]
    fn test_randomize_empty_notes_rejected() {
        let (_, mut sequencer) = sequencer(100, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [&str; 0] = [];
        assert!(matches!(
            sequencer.randomize_sequence(&empty, 3, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_randomize_plays_each_step() {
        let (output, mut sequencer) = sequencer(100, 1.0);
        let mut rng = StdRng::seed_from_u64(42);
        sequencer
            .randomize_sequence(&build_scale("c+").unwrap(), 16, &mut rng)
            .unwrap();

        let recordings = output.recordings();
        assert_eq!(recordings.len(), 16);
        assert!(recordings.iter().all(|r| r.closed && r.samples().len() == 100));
    }

    #[test]
    fn test_randomize_single_note_triples_frequency() {
        let (output, mut sequencer) = sequencer(100, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        sequencer.randomize_sequence(&["a"], 1, &mut rng).unwrap();

        let expected: Vec<u8> = synthesize_saw(1320.0, 1.0, 0.2, 100).unwrap().collect();
        assert_eq!(output.recordings()[0].samples(), expected);
    }

    #[test]
    fn test_randomize_is_seed_deterministic() {
        let scale = build_scale("a").unwrap();

        let (first, mut sequencer_a) = sequencer(100, 1.0);
        sequencer_a
            .randomize_sequence(&scale, 5, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let (second, mut sequencer_b) = sequencer(100, 1.0);
        sequencer_b
            .randomize_sequence(&scale, 5, &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(first.recordings(), second.recordings());
    }

    #[test]
    fn test_chord_at_wraps() {
        let freqs: Vec<Frequency> = [1.0, 10.0, 100.0, 1000.0, 10000.0]
            .into_iter()
            .map(Frequency::from)
            .collect();
        assert_eq!(chord_at(&freqs, 0).as_f64(), 1.0 + 100.0 + 10000.0);
        // 3, 5 % 5 = 0, 7 % 5 = 2
        assert_eq!(chord_at(&freqs, 3).as_f64(), 1000.0 + 1.0 + 100.0);
    }
}
