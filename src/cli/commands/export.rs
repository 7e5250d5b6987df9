//! Export command implementation
//!
//! Runs the fetch/stream pipeline and maps its result onto an exit code.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_EXPORT_FAILED, EXIT_SUCCESS};
use crate::config::FedRegConfig;
use crate::core::export::ExportPipeline;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV file (overrides export.output)
    pub output: Option<PathBuf>,

    /// Fetch from this URL instead of the configured query
    #[arg(long)]
    pub start_url: Option<String>,

    /// Page batches buffered between fetcher and writer
    #[arg(long)]
    pub channel_capacity: Option<usize>,

    /// Suppress the per-page progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl ExportArgs {
    /// Apply command-line overrides to the loaded configuration
    pub fn apply_overrides(&self, config: &mut FedRegConfig) {
        if let Some(output) = &self.output {
            tracing::info!(output = %output.display(), "Overriding output path from CLI");
            config.export.output = output.display().to_string();
        }

        if let Some(start_url) = &self.start_url {
            tracing::info!(start_url = %start_url, "Overriding start URL from CLI");
            config.source.start_url = Some(start_url.clone());
        }

        if let Some(capacity) = self.channel_capacity {
            tracing::info!(capacity, "Overriding channel capacity from CLI");
            config.export.channel_capacity = capacity;
        }
    }

    /// Execute the export command
    pub async fn execute(&self, mut config: FedRegConfig) -> anyhow::Result<i32> {
        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG_ERROR);
        }

        let start_url = config.source.start_url()?;
        let pipeline = ExportPipeline::from_config(&config)?.with_progress(!self.quiet);

        match pipeline
            .execute(start_url.as_str(), &config.export.output)
            .await
        {
            Ok(summary) => {
                if !self.quiet {
                    println!(
                        "Wrote {} records from {} pages to {} in {:.2}s",
                        summary.rows_written,
                        summary.pages_fetched,
                        summary.output.display(),
                        summary.duration.as_secs_f64()
                    );
                }
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                tracing::error!(kind = e.kind(), error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                Ok(EXIT_EXPORT_FAILED)
            }
        }
    }
}
