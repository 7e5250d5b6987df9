//! # fedreg-export
//!
//! Downloads presidential documents (executive orders by default) from the
//! [Federal Register API](https://www.federalregister.gov/developers/documentation/api/v1)
//! and streams them into a CSV file.
//!
//! ## Overview
//!
//! The export is a two-stage pipeline:
//!
//! - a **fetcher** walks the API's `next_page_url` links one page at a time
//! - a **writer** appends one CSV row per document as each page arrives
//!
//! The stages are connected by a bounded channel, so at most a page or two is
//! held in memory regardless of how many documents match. The first failure in
//! either stage ends the run; the other stage is allowed to wind down on its own.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The export pipeline
//! - [`adapters`] - Federal Register API client
//! - [`domain`] - Documents, output row shape and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fedreg_export::config::FedRegConfig;
//! use fedreg_export::core::export::ExportPipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FedRegConfig::default();
//!     let pipeline = ExportPipeline::from_config(&config)?;
//!
//!     let start_url = config.source.start_url()?;
//!     let summary = pipeline.execute(start_url.as_str(), "executive_orders.csv").await?;
//!
//!     println!("Exported {} documents", summary.rows_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! ```text
//! title,citation,document_number,president,signing_date,publication_date
//! "Ending Radical Indoctrination, and More",90 FR 8853,2025-02232,Donald Trump,2025-01-29,2025-02-03
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::FedRegError`]. Nothing is retried.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
