//! Page source trait definition
//!
//! The fetcher only needs "give me the page at this URL". Keeping that behind a
//! trait lets the pipeline run against the real API or an in-memory stub.

use crate::domain::{DocumentPage, Result};
use async_trait::async_trait;

/// A paginated source of document pages
///
/// Implementations perform exactly one attempt per call. Failures are
/// reported as [`FedRegError::RequestFailed`](crate::domain::FedRegError::RequestFailed)
/// or [`FedRegError::DecodeFailed`](crate::domain::FedRegError::DecodeFailed).
///
/// # Example
///
/// ```no_run
/// use fedreg_export::adapters::federal_register::{FederalRegisterClient, PageSource};
/// use fedreg_export::config::SourceConfig;
///
/// # async fn example() -> fedreg_export::domain::Result<()> {
/// let config = SourceConfig::default();
/// let client = FederalRegisterClient::new(&config)?;
///
/// let page = client.fetch_page(config.start_url()?.as_str()).await?;
/// println!("{} documents, next: {:?}", page.results.len(), page.next_page());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode the page at `url`
    async fn fetch_page(&self, url: &str) -> Result<DocumentPage>;
}
