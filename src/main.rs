//! Main entry point for the DataVision server

use std::sync::Arc;

use datavision::{api, config::Settings, AppState};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    let registry = tracing_subscriber::registry().with(filter);
    if settings.logging.format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }

    info!("Starting DataVision");

    let state = Arc::new(AppState::new(settings));

    // Build the router
    let app = api::routes::create_router(state.clone());

    let addr = state.settings.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("DataVision listening on {}", addr);
    info!("Dashboard available at http://{}/dashboard", addr);
    info!("Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
