//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for fedreg-export using clap.

pub mod commands;

use crate::config::{load_config, load_default_config, FedRegConfig};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when the export pipeline fails
pub const EXIT_EXPORT_FAILED: i32 = 1;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// fedreg-export - download presidential documents from federalregister.gov as CSV
#[derive(Parser, Debug)]
#[command(name = "fedreg-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long, env = "FEDREG_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FEDREG_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Load the configuration file named by `--config`, or the defaults
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be loaded or validated.
    pub fn load_config(&self) -> Result<FedRegConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => load_default_config(),
        }
    }

    /// Effective log level: the CLI flag wins over the configuration file
    pub fn effective_log_level<'a>(&'a self, config: &'a FedRegConfig) -> &'a str {
        self.log_level
            .as_deref()
            .unwrap_or(config.application.log_level.as_str())
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download all matching documents into a CSV file
    Export(commands::export::ExportArgs),

    /// Validate configuration and print the effective settings
    ValidateConfig(commands::validate::ValidateArgs),
}
