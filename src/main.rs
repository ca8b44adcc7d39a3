//! Entry point for the booking site backend.
//!
//! Configuration comes from the environment (see `config.rs`); a `.env`
//! file in the working directory is read first if present.

use anyhow::Context;
use tracing::{info, warn};

use cleanbook_web::config::AppConfig;
use cleanbook_web::{app, telemetry, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    telemetry::init(&config.telemetry).context("initializing logging")?;

    if config.environment.is_production() && config.cors_allow_origin.is_none() {
        warn!("CORS_ALLOW_ORIGIN is not set; accepting requests from any origin");
    }

    let addr = config.server.socket_addr()?;
    let environment = config.environment;
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(?environment, %addr, "cleanbook-web listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
