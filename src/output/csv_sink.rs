//! CSV playback table writer.
//!
//! Header row first, then one comma-separated row per sample. Values are
//! plain fixed-point numbers and the header names contain no delimiters,
//! so no quoting is needed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{OutputError, SampleSink};
use crate::types::{Sample, HEADER};

/// Writes samples as CSV rows through a buffered writer.
///
/// The buffer is flushed by [`SampleSink::finish`]; if the sink is dropped
/// early (error path) `BufWriter` still flushes what it holds.
pub struct CsvSink<W: Write> {
    writer: BufWriter<W>,
    rows: u64,
}

impl CsvSink<File> {
    /// Create (or truncate) the output file and write the header row.
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let file =
            File::create(path).map_err(|e| OutputError::Create(path.to_path_buf(), e))?;
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer and emit the header row.
    pub fn new(inner: W) -> Result<Self, OutputError> {
        let mut writer = BufWriter::new(inner);
        writeln!(writer, "{}", HEADER.join(","))?;
        Ok(Self { writer, rows: 0 })
    }

    /// Data rows written so far (header excluded).
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, OutputError> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Write(e.into_error()))
    }
}

impl<W: Write> SampleSink for CsvSink<W> {
    fn write_sample(&mut self, sample: &Sample) -> Result<(), OutputError> {
        writeln!(self.writer, "{}", sample.to_record().join(","))?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}
