//! Salary records server
//!
//! Reads configuration once at startup, builds the process-wide store client
//! and serves the REST API until SIGINT/SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use salary_records::config::LoggingConfig;
use salary_records::{Config, SalaryRecordsModule};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Salary records REST API
#[derive(Parser, Debug)]
#[command(name = "salary-server")]
#[command(version)]
struct Cli {
    /// Optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address from configuration
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine; variables may come from the environment
    let _ = dotenvy::dotenv();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }

    init_tracing(&config.logging);

    let module = SalaryRecordsModule::init(&config)
        .await
        .context("Failed to initialize salary records module")?;
    let app = module.router(&config.server.base_path);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "Salary records server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    // Dropping the module releases the store client and its pool
    drop(module);
    tracing::info!("Salary records server stopped");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(logging: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if logging.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
