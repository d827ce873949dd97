//! Diabetes Risk Server
//!
//! HTTP server wrapping the risk scoring pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Run with layered configuration (config/default.toml + env vars)
//! diabetes-risk-server
//!
//! # Run with an explicit config file
//! diabetes-risk-server --config /path/to/config.toml
//!
//! # Override bind address and port
//! diabetes-risk-server --bind 0.0.0.0 --port 9000
//!
//! # Point at a different artifact pair
//! diabetes-risk-server --scaler /opt/models/scaler.json --model /opt/models/model.json
//!
//! # Run in debug mode
//! RUST_LOG=debug diabetes-risk-server
//! ```
//!
//! Priority: CLI arguments > environment variables > config file > defaults.
//!
//! Startup is fail-fast: if either artifact is missing, unreadable, or the
//! wrong shape, the process exits before binding the listener. There is no
//! degraded serving mode.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use diabetes_risk_core::{Config, ModelArtifacts, RiskScorer};
use diabetes_risk_server::{build_router, AppState};

/// Diabetes risk scoring over HTTP.
#[derive(Parser)]
#[command(name = "diabetes-risk-server")]
#[command(version)]
#[command(about = "HTTP server scoring diabetes risk from eight clinical markers")]
struct Cli {
    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address override
    #[arg(long)]
    bind: Option<String>,

    /// Port override
    #[arg(long)]
    port: Option<u16>,

    /// Standardization artifact override
    #[arg(long)]
    scaler: Option<PathBuf>,

    /// Classifier artifact override
    #[arg(long)]
    model: Option<PathBuf>,
}

/// Apply CLI overrides to config.
///
/// Called after config is loaded but before validation, so invalid CLI
/// values are caught by the same `validate()` pass.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref bind) = cli.bind {
        info!("CLI override: bind_address = {}", bind);
        config.server.bind_address = bind.clone();
    }

    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    if let Some(ref scaler) = cli.scaler {
        info!("CLI override: scaler_path = {}", scaler.display());
        config.artifacts.scaler_path = scaler.clone();
    }

    if let Some(ref model) = cli.model {
        info!("CLI override: model_path = {}", model.display());
        config.artifacts.model_path = model.clone();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to install shutdown handler: {}", err);
        return;
    }
    info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    info!("Diabetes risk server starting...");

    // Load configuration
    let mut config = if let Some(ref path) = cli.config {
        info!("Loading configuration from: {:?}", path);
        Config::from_file(path)? // validate() is called inside from_file()
    } else {
        Config::load()?
    };

    // Apply CLI overrides, then re-validate with overrides in place
    apply_overrides(&mut config, &cli);
    config.validate()?;

    // Load artifacts before binding: every failure here is fatal and the
    // process must never reach a request-serving state without them.
    let artifacts = ModelArtifacts::load(
        &config.artifacts.scaler_path,
        &config.artifacts.model_path,
    )
    .map_err(|err| {
        error!("FATAL: artifact load failed: {}", err);
        err
    })?;

    let scorer = RiskScorer::new(artifacts);
    let state = AppState::new(scorer, &config.server);
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
