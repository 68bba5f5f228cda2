//! salary-predict: fetch a salary record and print the model's prediction

use anyhow::{Context, Result};
use clap::Parser;
use salary_predict::{run, RecordFetcher, DEFAULT_API_URL, DEFAULT_MODEL_PATH};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Predict a salary from a record served by the salary records API
#[derive(Parser, Debug)]
#[command(name = "salary-predict")]
#[command(version)]
struct Cli {
    /// Record URL to fetch
    #[arg(long, default_value = DEFAULT_API_URL)]
    url: String,

    /// Trained model artifact (JSON)
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let fetcher = RecordFetcher::new(cli.url)?;
    let mut stdout = std::io::stdout();
    run(&fetcher, &cli.model, &mut stdout)
        .await
        .with_context(|| format!("Salary prediction from {} failed", fetcher.url()))?;

    Ok(())
}
