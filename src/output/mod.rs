//! Sample sinks: where emitted playback rows go.
//!
//! The engine only knows [`SampleSink`]. The binary writes to a [`CsvSink`];
//! tests collect rows in a [`MemorySink`].

mod csv_sink;

pub use csv_sink::CsvSink;

use crate::types::Sample;
use std::path::PathBuf;

/// Output errors. Both are fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Cannot create output file ({}): {}", .0.display(), .1)]
    Create(PathBuf, #[source] std::io::Error),
    #[error("Cannot write to output: {0}")]
    Write(#[from] std::io::Error),
}

/// Destination for playback samples, written one per tick in order.
pub trait SampleSink {
    /// Append one sample.
    fn write_sample(&mut self, sample: &Sample) -> Result<(), OutputError>;

    /// Flush anything buffered. Called once after the last sample.
    fn finish(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}

/// Collects samples in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub samples: Vec<Sample>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SampleSink for MemorySink {
    fn write_sample(&mut self, sample: &Sample) -> Result<(), OutputError> {
        self.samples.push(*sample);
        Ok(())
    }
}
