//! Configuration management for fedreg-export.
//!
//! # Overview
//!
//! Configuration is an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `FEDREG_<SECTION>_<KEY>` environment overrides
//! - Defaults for every setting (the stock executive-order query)
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`SourceConfig`] - Federal Register endpoint, query and HTTP settings
//! - [`ExportConfig`] - Output path and handoff capacity
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! per_page = 1000
//! order = "newest"
//! presidential_document_type = "executive_order"
//! user_agent = "${FEDREG_CONTACT}"
//!
//! [export]
//! output = "executive_orders.csv"
//! channel_capacity = 1
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_default_config};
pub use schema::{ApplicationConfig, ExportConfig, FedRegConfig, LoggingConfig, SourceConfig};
