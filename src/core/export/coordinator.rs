//! Export pipeline - runs the fetcher and the writer concurrently
//!
//! The two stages share one bounded handoff channel. The fetcher runs as an
//! async task, the writer on a blocking thread. Both are always awaited to a
//! terminal state; the first error to complete becomes the run's result.

use super::fetcher::{FetchStats, Fetcher, PageBatch};
use super::state::PipelineState;
use super::summary::ExportSummary;
use super::writer::{CsvWriter, WriteStats};
use crate::adapters::federal_register::{FederalRegisterClient, PageSource};
use crate::config::FedRegConfig;
use crate::domain::{FedRegError, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;

/// Terminal value of one pipeline stage
enum StageOutcome {
    Fetched(FetchStats),
    Written(WriteStats),
}

/// Fetch/stream pipeline from a [`PageSource`] into a CSV file
///
/// # Example
///
/// ```no_run
/// use fedreg_export::config::FedRegConfig;
/// use fedreg_export::core::export::ExportPipeline;
///
/// # async fn example() -> fedreg_export::domain::Result<()> {
/// let config = FedRegConfig::default();
/// let pipeline = ExportPipeline::from_config(&config)?;
///
/// let start_url = config.source.start_url()?;
/// let summary = pipeline.execute(start_url.as_str(), &config.export.output).await?;
/// println!("Wrote {} rows", summary.rows_written);
/// # Ok(())
/// # }
/// ```
pub struct ExportPipeline {
    source: Arc<dyn PageSource>,
    channel_capacity: usize,
    show_progress: bool,
    state: watch::Sender<PipelineState>,
}

impl ExportPipeline {
    /// Create a pipeline over any page source
    ///
    /// The handoff holds a single batch by default.
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        let (state, _) = watch::channel(PipelineState::Idle);
        Self {
            source,
            channel_capacity: 1,
            show_progress: true,
            state,
        }
    }

    /// Create a pipeline reading from the Federal Register API
    ///
    /// # Errors
    ///
    /// Returns [`FedRegError::Configuration`] if the HTTP client cannot be built.
    pub fn from_config(config: &FedRegConfig) -> Result<Self> {
        let client = FederalRegisterClient::new(&config.source)?;
        Ok(Self::new(Arc::new(client)).with_channel_capacity(config.export.channel_capacity))
    }

    /// Set how many page batches may wait between fetcher and writer (minimum 1)
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Toggle the per-page progress line on stdout
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Current run state
    pub fn state(&self) -> PipelineState {
        self.state.borrow().clone()
    }

    /// Subscribe to run state transitions
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    /// Fetch every page starting at `start_url` and write all records to `output`
    ///
    /// The output file is created or truncated. On failure it may hold a prefix
    /// of the rows: every page delivered before the failing one is written.
    ///
    /// # Errors
    ///
    /// Returns the first stage error by completion order: `RequestFailed`,
    /// `DecodeFailed`, `OutputOpenFailed`, `WriteFailed`, or `Pipeline` when a
    /// stage task panicked.
    pub async fn execute(&self, start_url: &str, output: impl AsRef<Path>) -> Result<ExportSummary> {
        let started = Instant::now();
        let output = output.as_ref().to_path_buf();
        let mut summary = ExportSummary::new(&output);

        self.state.send_replace(PipelineState::Running);
        tracing::info!(
            start_url = %start_url,
            output = %output.display(),
            channel_capacity = self.channel_capacity,
            "Starting export pipeline"
        );

        let (sender, receiver) = mpsc::channel::<PageBatch>(self.channel_capacity);
        let fetcher = Fetcher::new(self.source.clone()).with_progress(self.show_progress);
        let writer = CsvWriter::new(&output);
        let start_url = start_url.to_string();

        let mut stages: JoinSet<Result<StageOutcome>> = JoinSet::new();
        stages.spawn_blocking(move || writer.run(receiver).map(StageOutcome::Written));
        stages.spawn(async move {
            fetcher
                .run(&start_url, sender)
                .await
                .map(StageOutcome::Fetched)
        });

        let mut first_error: Option<FedRegError> = None;
        while let Some(joined) = stages.join_next().await {
            let outcome = joined
                .map_err(|e| FedRegError::Pipeline(format!("stage task failed: {e}")))
                .and_then(|result| result);

            match outcome {
                Ok(StageOutcome::Fetched(stats)) => {
                    summary.pages_fetched = stats.pages;
                    summary.records_fetched = stats.records;
                }
                Ok(StageOutcome::Written(stats)) => {
                    summary.rows_written = stats.rows;
                }
                Err(e) if first_error.is_none() => {
                    tracing::error!(kind = e.kind(), error = %e, "Export stage failed");
                    first_error = Some(e);
                }
                Err(e) => {
                    tracing::debug!(kind = e.kind(), error = %e, "Ignoring later stage error");
                }
            }
        }

        if let Some(e) = first_error {
            self.state.send_replace(PipelineState::Failed(e.to_string()));
            return Err(e);
        }

        self.state.send_replace(PipelineState::Succeeded);
        let summary = summary.with_duration(started.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::testing::StubSource;
    use std::time::Duration;
    use tempfile::TempDir;

    const HEADER_LINE: &str =
        "title,citation,document_number,president,signing_date,publication_date";

    fn pipeline(source: &Arc<StubSource>) -> ExportPipeline {
        ExportPipeline::new(source.clone()).with_progress(false)
    }

    fn titles(path: &Path) -> Vec<String> {
        let contents = std::fs::read_to_string(path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(HEADER_LINE));
        lines
            .map(|line| line.split(',').next().unwrap_or_default().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_rows_follow_page_then_record_order() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.csv");
        let source = Arc::new(StubSource::chain(vec![
            Some(vec!["p1a", "p1b", "p1c"]),
            Some(vec!["p2a"]),
            Some(vec![]),
            Some(vec!["p4a", "p4b"]),
        ]));
        let pipeline = pipeline(&source);

        let summary = pipeline.execute(StubSource::START, &output).await.unwrap();

        assert_eq!(summary.pages_fetched, 4);
        assert_eq!(summary.records_fetched, 6);
        assert_eq!(summary.rows_written, 6);
        assert!(summary.is_complete());
        assert_eq!(
            titles(&output),
            ["p1a", "p1b", "p1c", "p2a", "p4a", "p4b"]
        );
        assert_eq!(pipeline.state(), PipelineState::Succeeded);
    }

    #[tokio::test]
    async fn test_first_page_failure_writes_no_rows() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.csv");
        let source = Arc::new(StubSource::chain(vec![None]));
        let pipeline = pipeline(&source);

        let err = pipeline
            .execute(StubSource::START, &output)
            .await
            .unwrap_err();

        assert!(matches!(err, FedRegError::RequestFailed { .. }));
        assert!(titles(&output).is_empty());
        assert!(matches!(pipeline.state(), PipelineState::Failed(_)));
    }

    #[tokio::test]
    async fn test_later_page_failure_keeps_earlier_pages() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.csv");
        let source = Arc::new(StubSource::chain(vec![
            Some(vec!["a", "b"]),
            Some(vec!["c"]),
            None,
            Some(vec!["never"]),
        ]));

        let err = pipeline(&source)
            .execute(StubSource::START, &output)
            .await
            .unwrap_err();

        assert!(matches!(err, FedRegError::RequestFailed { .. }));
        assert_eq!(titles(&output), ["a", "b", "c"]);
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_output_open_failure_unwinds_fetcher() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("no-such-dir").join("out.csv");
        let source = Arc::new(StubSource::chain(vec![
            Some(vec!["a"]),
            Some(vec!["b"]),
            Some(vec!["c"]),
            Some(vec!["d"]),
        ]));

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            pipeline(&source).execute(StubSource::START, &output),
        )
        .await
        .expect("pipeline must not hang when the writer fails");

        assert!(matches!(result, Err(FedRegError::OutputOpenFailed { .. })));
        // The fetcher notices the closed handoff after at most two deliveries
        assert!(source.calls() <= 2);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_write_failure_unwinds_fetcher() {
        let big = "x".repeat(16 * 1024);
        let pages: Vec<Option<Vec<&str>>> = (0..50).map(|_| Some(vec![big.as_str()])).collect();
        let source = Arc::new(StubSource::chain(pages));
        let pipeline = pipeline(&source);

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            pipeline.execute(StubSource::START, "/dev/full"),
        )
        .await
        .expect("pipeline must not hang when a write fails");

        assert!(matches!(result, Err(FedRegError::WriteFailed(_))));
        assert!(matches!(pipeline.state(), PipelineState::Failed(_)));
        // Writer fails on the first page; the one-slot handoff lets the fetcher
        // run at most a couple of pages ahead before it sees the closed channel
        assert!(source.calls() <= 3, "fetched {} pages", source.calls());
    }

    #[tokio::test]
    async fn test_rerun_overwrites_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.csv");
        let source = Arc::new(StubSource::chain(vec![Some(vec!["a", "b"]), Some(vec!["c"])]));
        let pipeline = pipeline(&source);

        pipeline.execute(StubSource::START, &output).await.unwrap();
        let first = std::fs::read_to_string(&output).unwrap();
        pipeline.execute(StubSource::START, &output).await.unwrap();
        let second = std::fs::read_to_string(&output).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_larger_channel_capacity() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.csv");
        let pages: Vec<Option<Vec<&str>>> = (0..20).map(|_| Some(vec!["x", "y"])).collect();
        let source = Arc::new(StubSource::chain(pages));

        let summary = pipeline(&source)
            .with_channel_capacity(8)
            .execute(StubSource::START, &output)
            .await
            .unwrap();

        assert_eq!(summary.pages_fetched, 20);
        assert_eq!(summary.rows_written, 40);
    }

    #[tokio::test]
    async fn test_state_transitions_are_observable() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(StubSource::chain(vec![Some(vec!["a"])]));
        let pipeline = pipeline(&source);
        let receiver = pipeline.subscribe();

        assert_eq!(pipeline.state(), PipelineState::Idle);
        pipeline
            .execute(StubSource::START, dir.path().join("out.csv"))
            .await
            .unwrap();

        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow(), PipelineState::Succeeded);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let source = Arc::new(StubSource::chain(vec![]));
        let pipeline = pipeline(&source).with_channel_capacity(0);
        assert_eq!(pipeline.channel_capacity, 1);
    }
}
