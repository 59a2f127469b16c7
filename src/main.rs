// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Novi API Server
//!
//! Accepts traveller preferences and serves venue data from Firestore.

use novi_api::{
    config::Config,
    db::{provider_chain, ClientBootstrap},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        environment = config.environment.as_str(),
        "Starting Novi API"
    );

    // Resolve credentials and connect to Firestore; refuse to serve without it
    let bootstrap = ClientBootstrap::new(provider_chain(&config));
    tracing::info!(providers = ?bootstrap.provider_names(), "Resolving Firestore credentials");
    let db = bootstrap
        .firestore(config.gcp_project_id.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Firestore bootstrap failed; not serving");
            e
        })?;

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), db));

    // Build router
    let app = novi_api::routes::create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("novi_api=debug,info")),
        )
        .with(format)
        .init();
}
