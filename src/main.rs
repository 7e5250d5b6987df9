use clap::Parser;
use fedreg_export::cli::{Cli, Commands, EXIT_CONFIG_ERROR, EXIT_EXPORT_FAILED};
use fedreg_export::config::FedRegConfig;
use fedreg_export::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Optional .env file; a missing file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let logging_guard = match init_logging(cli.effective_log_level(&config), &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "fedreg-export");

    let exit_code = match execute_command(&cli, config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_EXPORT_FAILED
        }
    };

    // process::exit skips destructors, so flush file logs first
    drop(logging_guard);
    process::exit(exit_code);
}

async fn execute_command(cli: &Cli, config: FedRegConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute(config).await,
        Commands::ValidateConfig(args) => args.execute(&config).await,
    }
}
