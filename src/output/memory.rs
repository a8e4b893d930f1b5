//! In-memory sink that records every stream it opens.

use std::cell::RefCell;
use std::rc::Rc;

use super::{AudioSink, SinkConfig, SinkFactory};
use crate::error::{Error, Result};

/// Everything written to one stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    /// Configuration the stream was opened with
    pub config: SinkConfig,
    /// Each `write` call, in order
    pub writes: Vec<Vec<u8>>,
    /// Whether the stream was closed
    pub closed: bool,
}

impl Recording {
    /// All samples written, concatenated.
    pub fn samples(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

/// A [`SinkFactory`] that keeps the written audio in memory.
///
/// Clones share the same recordings, so a clone can be handed to a
/// sequencer while the original is kept for inspection.
///
/// # Examples
///
/// ```
/// use toneplay::output::{AudioSink, MemoryOutput, SinkConfig, SinkFactory};
///
/// let mut output = MemoryOutput::new();
/// let mut sink = output.open(&SinkConfig::mono_u8(8000)).unwrap();
/// sink.write(&[128, 129]).unwrap();
/// sink.close().unwrap();
///
/// let recordings = output.recordings();
/// assert_eq!(recordings[0].samples(), vec![128, 129]);
/// assert!(recordings[0].closed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    recordings: Rc<RefCell<Vec<Recording>>>,
    write_limit: Option<usize>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails every write after the first `limit` writes across all streams.
    pub fn with_write_limit(limit: usize) -> Self {
        Self {
            write_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Snapshot of the streams opened so far.
    pub fn recordings(&self) -> Vec<Recording> {
        self.recordings.borrow().clone()
    }

    /// Total number of `write` calls that succeeded.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl SinkFactory for MemoryOutput {
    type Sink = MemorySink;

    fn open(&mut self, config: &SinkConfig) -> Result<MemorySink> {
        let mut recordings = self.recordings.borrow_mut();
        recordings.push(Recording {
            config: *config,
            writes: Vec::new(),
            closed: false,
        });
        Ok(MemorySink {
            output: self.clone(),
            index: recordings.len() - 1,
        })
    }
}

/// A stream opened by [`MemoryOutput`].
#[derive(Debug)]
pub struct MemorySink {
    output: MemoryOutput,
    index: usize,
}

impl AudioSink for MemorySink {
    fn write(&mut self, samples: &[u8]) -> Result<()> {
        let mut writes = self.output.writes.borrow_mut();
        if self.output.write_limit.is_some_and(|limit| *writes >= limit) {
            return Err(Error::Device("write limit reached".to_string()));
        }
        let mut recordings = self.output.recordings.borrow_mut();
        let recording = &mut recordings[self.index];
        if recording.closed {
            return Err(Error::Device("write to a closed stream".to_string()));
        }
        recording.writes.push(samples.to_vec());
        *writes += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.output.recordings.borrow_mut()[self.index].closed = true;
        Ok(())
    }
}
