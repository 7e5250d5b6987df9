//! Logging and observability
//!
//! Structured logging via `tracing`:
//! - Human-readable console output on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use fedreg_export::logging::init_logging;
//! use fedreg_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(page = 1, records = 1000, "Fetched page");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
