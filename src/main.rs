// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::mission_time_service::MissionTimeService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::mission_time_client::MissionTimeClient;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create external API client (infrastructure layer)
    let mission_time_client = Arc::new(MissionTimeClient::new(
        config.mission_time_api.base_url,
        Duration::from_secs(config.mission_time_api.timeout_secs),
    )?);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(config.generator.seed);
    let mission_time_service = MissionTimeService::new(mission_time_client);

    if config.generator.seed.is_some() {
        tracing::info!("Mock data generator running with a fixed seed");
    }

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        mission_time_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind_address))?;
    tracing::info!("Starting fleet-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
