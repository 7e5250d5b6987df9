//! Fetch/stream export pipeline
//!
//! This module provides:
//! - The [`Fetcher`] stage, which walks the page links of the API
//! - The [`CsvWriter`] stage, which streams batches into the output file
//! - The [`ExportPipeline`], which runs both and reports the first failure
//! - Run state ([`PipelineState`]) and reporting ([`ExportSummary`])

pub mod coordinator;
pub mod fetcher;
pub mod state;
pub mod summary;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::ExportPipeline;
pub use fetcher::{FetchStats, Fetcher, PageBatch};
pub use state::PipelineState;
pub use summary::ExportSummary;
pub use writer::{CsvWriter, WriteStats};
