use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use mentio::recognizer::{PatternRecognizer, Recognizer};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

mod api;
mod cli;
mod config;
mod error;
mod state;

use crate::api::create_router;
use crate::cli::CliArgs;
use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli_args = CliArgs::parse();

    // Set up logging
    let filter = if let Some(ref level) = cli_args.log_level {
        tracing_subscriber::EnvFilter::new(level)
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Mentio server v{}", mentio::VERSION);

    // Load configuration from CLI arguments and environment variables
    let server_config = ServerConfig::from_cli_and_env(cli_args)?;
    info!("Server configuration loaded");

    // Build the recognizer before binding the port: a configuration failure
    // must prevent the service from ever accepting traffic
    let recognizer = PatternRecognizer::new().context("failed to build entity recognizer")?;
    info!(recognizer = recognizer.name(), "entity recognizer ready");

    // Create application state
    let app_state = Arc::new(AppState::new(Arc::new(recognizer), server_config.clone()));

    // Create the router with all API endpoints
    let app = create_router(app_state)
        .layer(RequestBodyLimitLayer::new(server_config.max_request_size))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);
    info!("API documentation available at http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
