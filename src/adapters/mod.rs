//! External system integrations for fedreg-export.
//!
//! - [`federal_register`] - Federal Register documents API
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the export
//! pipeline can be driven by stub sources in tests.
//!
//! ```rust,no_run
//! use fedreg_export::adapters::federal_register::FederalRegisterClient;
//! use fedreg_export::config::SourceConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FederalRegisterClient::new(&SourceConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod federal_register;
