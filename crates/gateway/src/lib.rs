//! API Gateway Library
//!
//! This crate provides the HTTP REST API that translates requests to gRPC calls.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::clients::ContentClient;
use crate::config::GatewayConfig;
use crate::routes::create_app;
use crate::state::AppState;

/// Run the gateway as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    content_port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env();
    config.content_service.endpoint = format!("http://{}:{}", host, content_port);

    run(host, port, config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run(
    host: &str,
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create gRPC client
    let content_client = Arc::new(ContentClient::connect(&config.content_service)?);

    // Create app state
    let state = AppState::new(content_client, config);

    // Build router
    let app = create_app(state);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
