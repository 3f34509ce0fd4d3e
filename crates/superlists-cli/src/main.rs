// crates/superlists-cli/src/main.rs
// ============================================================================
// Module: Superlists CLI Entry Point
// Description: Command-line entry point for the Superlists web server.
// Purpose: Load configuration and serve the application.
// Dependencies: clap, superlists-web, tokio, tracing-subscriber
// ============================================================================

//! ## Overview
//! The `superlists` binary loads TOML configuration (with optional CLI
//! overrides), installs the tracing subscriber, and serves the web
//! application until interrupted. Startup failures exit non-zero after
//! logging the error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use superlists_web::SuperlistsConfig;
use superlists_web::WebServer;
use superlists_web::WebServerError;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: CLI Arguments
// ============================================================================

/// Superlists, a minimal multi-list to-do web application.
#[derive(Parser, Debug)]
#[command(name = "superlists", version)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured bind address (e.g. 127.0.0.1:8000).
    #[arg(long)]
    bind: Option<String>,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Process entry point.
#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "superlists failed");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr tracing subscriber honoring `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Loads configuration, applies CLI overrides, and serves.
async fn run(cli: Cli) -> Result<(), WebServerError> {
    let mut config = SuperlistsConfig::load(cli.config.as_deref())
        .map_err(|err| WebServerError::Config(err.to_string()))?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    WebServer::from_config(config)?.serve().await
}
