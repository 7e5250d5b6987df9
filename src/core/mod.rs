//! Core business logic for fedreg-export.
//!
//! # Modules
//!
//! - [`export`] - The fetch/stream pipeline
//!
//! # Export Workflow
//!
//! 1. **Fetch**: request a page, decode it, hand its records to the writer
//! 2. **Follow**: repeat with `next_page_url` until the API reports the last page
//! 3. **Write**: append one CSV row per record, in page order, as batches arrive
//! 4. **Report**: on success, log an [`export::ExportSummary`]; otherwise return the
//!    first error
//!
//! # Example
//!
//! ```rust,no_run
//! use fedreg_export::config::load_default_config;
//! use fedreg_export::core::export::ExportPipeline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_default_config()?;
//! let pipeline = ExportPipeline::from_config(&config)?;
//!
//! let summary = pipeline
//!     .execute(config.source.start_url()?.as_str(), &config.export.output)
//!     .await?;
//!
//! println!("Pages: {}", summary.pages_fetched);
//! println!("Rows: {}", summary.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod export;
