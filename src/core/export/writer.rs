//! Writer stage: serializes page batches into the output CSV file
//!
//! The writer does blocking file I/O and is meant to run on a blocking thread
//! (`spawn_blocking`), receiving batches with `blocking_recv`.

use super::fetcher::PageBatch;
use crate::domain::{FedRegError, Result, CSV_HEADER};
use std::fs::File;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Counters reported by a finished writer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Batches received from the fetcher
    pub batches: usize,

    /// Data rows written, excluding the header
    pub rows: usize,
}

/// CSV sink for document batches
#[derive(Debug, Clone)]
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    /// Create a writer targeting `path`; nothing is touched until [`CsvWriter::run`]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create (or truncate) the output file and drain `receiver` into it
    ///
    /// The header is written once before any data row. Rows are written in
    /// arrival order and buffered output is flushed once the fetcher closes the
    /// handoff.
    ///
    /// # Errors
    ///
    /// - [`FedRegError::OutputOpenFailed`] if the file cannot be created
    /// - [`FedRegError::WriteFailed`] if a row cannot be written or the final
    ///   flush fails; remaining batches are not processed
    pub fn run(&self, mut receiver: mpsc::Receiver<PageBatch>) -> Result<WriteStats> {
        let file = File::create(&self.path).map_err(|e| FedRegError::OutputOpenFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %self.path.display(), "Opened output file");

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(CSV_HEADER).map_err(write_failed)?;

        let mut stats = WriteStats::default();
        while let Some(batch) = receiver.blocking_recv() {
            for document in &batch {
                writer.write_record(document.to_row()).map_err(write_failed)?;
            }
            stats.batches += 1;
            stats.rows += batch.len();
            tracing::debug!(batch = stats.batches, rows = batch.len(), "Wrote batch");
        }

        writer
            .flush()
            .map_err(|e| FedRegError::WriteFailed(format!("flush failed: {e}")))?;

        tracing::debug!(
            path = %self.path.display(),
            rows = stats.rows,
            "Closed output file"
        );

        Ok(stats)
    }
}

fn write_failed(err: csv::Error) -> FedRegError {
    FedRegError::WriteFailed(err.to_string())
}
