//! HTTP server for the Payroll Calculation Engine.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `PAYROLL_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = Registry::default().with(
        fmt::layer()
            .with_line_number(true)
            .with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            ),
    );
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {}", err);
        return ExitCode::FAILURE;
    }

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let loader = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let router = create_router(AppState::new(loader));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(bind_addr = %bind_addr, config_dir = %config_dir, "Payroll engine listening");
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
