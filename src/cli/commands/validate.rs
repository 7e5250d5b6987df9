//! Validate config command implementation

use crate::cli::EXIT_SUCCESS;
use crate::config::FedRegConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// The configuration has already been loaded and validated; this prints the
    /// effective settings.
    pub async fn execute(&self, config: &FedRegConfig) -> anyhow::Result<i32> {
        tracing::info!("Configuration is valid");

        let start_url = config.source.start_url()?;

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Start URL: {start_url}");
        println!("  Timeout: {}s", config.source.timeout_seconds);
        println!("  User-Agent: {}", config.source.user_agent);
        println!("  Output: {}", config.export.output);
        println!("  Channel Capacity: {}", config.export.channel_capacity);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(EXIT_SUCCESS)
    }
}
