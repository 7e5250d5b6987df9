//! Export summary and reporting

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a successful export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Pages fetched from the API
    pub pages_fetched: usize,

    /// Records contained in those pages
    pub records_fetched: usize,

    /// Data rows written to the output file (header excluded)
    pub rows_written: usize,

    /// Output file
    pub output: PathBuf,

    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create an empty summary for a run writing to `output`
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            pages_fetched: 0,
            records_fetched: 0,
            rows_written: 0,
            output: output.into(),
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Every fetched record made it into the output
    pub fn is_complete(&self) -> bool {
        self.records_fetched == self.rows_written
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            pages = self.pages_fetched,
            records = self.records_fetched,
            rows = self.rows_written,
            output = %self.output.display(),
            started_at = %self.started_at.to_rfc3339(),
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );

        if !self.is_complete() {
            tracing::warn!(
                records = self.records_fetched,
                rows = self.rows_written,
                "Row count does not match fetched record count"
            );
        }
    }
}
