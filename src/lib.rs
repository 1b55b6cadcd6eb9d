pub mod aggregate; // countByCategory, crossTabulate, histogram, grouped counts
pub mod cli;
pub mod config;
pub mod dashboard; // Session state, refresh orchestrator, chart/map sinks
pub mod filter;
pub mod geo; // Facility grouping + map coordinate assignment
pub mod ingest; // CSV → RawRecord
pub mod models;
pub mod normalize;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use cli::AppError;

pub fn run() -> Result<(), AppError> {
    // Initialize tracing; stdout carries the JSON payload
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = cli::Cli::parse();
    let output = cli::execute(&cli)?;
    println!("{output}");
    Ok(())
}
