//! Fetcher stage: walks the pagination chain and hands page batches to the writer

use crate::adapters::federal_register::PageSource;
use crate::domain::{Document, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The records of one page, in server order
pub type PageBatch = Vec<Document>;

/// Counters reported by a finished fetcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Pages fetched successfully
    pub pages: usize,

    /// Records across those pages
    pub records: usize,

    /// The writer hung up before the last fetched page could be delivered
    pub writer_closed: bool,
}

/// Sequential page fetcher
///
/// Exactly one request is in flight at a time. The sender half of the handoff
/// is owned by [`Fetcher::run`], so it is dropped on every exit path and the
/// writer always observes end-of-stream.
pub struct Fetcher {
    source: Arc<dyn PageSource>,
    show_progress: bool,
}

impl Fetcher {
    /// Create a fetcher reading from `source`
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            show_progress: true,
        }
    }

    /// Toggle the per-page progress line on stdout
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fetch from `start_url` until the API reports no next page
    ///
    /// # Errors
    ///
    /// Returns the first `RequestFailed` or `DecodeFailed` error from the source.
    /// A writer that has gone away is not an error here: the fetch stops and the
    /// writer's own error becomes the run's result.
    pub async fn run(&self, start_url: &str, sender: mpsc::Sender<PageBatch>) -> Result<FetchStats> {
        let mut stats = FetchStats::default();
        let mut next_url = Some(start_url.to_string());

        while let Some(url) = next_url.take() {
            let page = self.source.fetch_page(&url).await?;

            stats.pages += 1;
            stats.records += page.results.len();

            if self.show_progress {
                println!("Fetched page {} ({} records)", stats.pages, page.results.len());
            }
            tracing::info!(
                page = stats.pages,
                records = page.results.len(),
                total_pages = ?page.total_pages,
                "Fetched page"
            );

            next_url = page.next_page().map(str::to_string);

            if sender.send(page.results).await.is_err() {
                tracing::warn!(
                    page = stats.pages,
                    "Writer closed the handoff, stopping fetch"
                );
                stats.writer_closed = true;
                break;
            }
        }

        tracing::debug!(
            pages = stats.pages,
            records = stats.records,
            "Fetcher finished"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::testing::StubSource;
    use crate::domain::FedRegError;

    #[tokio::test]
    async fn test_fetch_all_pages_in_order() {
        let source = Arc::new(StubSource::chain(vec![
            Some(vec!["a", "b"]),
            Some(vec![]),
            Some(vec!["c"]),
        ]));
        let fetcher = Fetcher::new(source.clone()).with_progress(false);
        let (tx, mut rx) = mpsc::channel(8);

        let stats = fetcher.run(StubSource::START, tx).await.unwrap();
        assert_eq!(stats.pages, 3);
        assert_eq!(stats.records, 3);
        assert!(!stats.writer_closed);
        assert_eq!(source.calls(), 3);

        let mut titles = Vec::new();
        let mut batches = 0;
        while let Some(batch) = rx.recv().await {
            batches += 1;
            titles.extend(batch.into_iter().map(|d| d.title));
        }
        assert_eq!(batches, 3);
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_error_closes_handoff() {
        let source = Arc::new(StubSource::chain(vec![Some(vec!["a"]), None, Some(vec!["z"])]));
        let fetcher = Fetcher::new(source.clone()).with_progress(false);
        let (tx, mut rx) = mpsc::channel(8);

        let err = fetcher.run(StubSource::START, tx).await.unwrap_err();
        assert!(matches!(err, FedRegError::RequestFailed { .. }));
        assert_eq!(source.calls(), 2);

        // Page one was delivered, then the channel reports end-of-stream
        assert_eq!(rx.recv().await.map(|b| b.len()), Some(1));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stops_when_writer_is_gone() {
        let source = Arc::new(StubSource::chain(vec![
            Some(vec!["a"]),
            Some(vec!["b"]),
            Some(vec!["c"]),
        ]));
        let fetcher = Fetcher::new(source.clone()).with_progress(false);
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let stats = fetcher.run(StubSource::START, tx).await.unwrap();
        assert!(stats.writer_closed);
        assert_eq!(stats.pages, 1);
        assert_eq!(source.calls(), 1);
    }
}
