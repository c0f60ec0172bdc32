//! HTTP server for the HRMS reports engine.
//!
//! Environment:
//! - `HRMS_REPORTS_CONFIG`: path to the YAML config (default `./config/reports.yaml`)
//! - `HRMS_REPORTS_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;
use std::error::Error;

use hrms_reports::api::{create_router, AppState};
use hrms_reports::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/reports.yaml";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_path =
        env::var("HRMS_REPORTS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let addr = env::var("HRMS_REPORTS_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let loader = ConfigLoader::load(&config_path)?;
    info!(
        config = %config_path,
        leave_policy = ?loader.config().leave_policy,
        trend_window_days = loader.config().trend_window_days,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Reports server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
