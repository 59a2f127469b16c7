// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod dev;
pub mod user;
pub mod venues;

use crate::error::AppError;
use crate::middleware::require_development;
use crate::AppState;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: crate::SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub docs: String,
    pub health: String,
}

/// Service banner with pointers to docs and health.
async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Novi API".to_string(),
        docs: "/docs".to_string(),
        health: "/health".to_string(),
    })
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // The frontend is deployed separately and sends no cookies.
    let cors = CorsLayer::permissive();

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(user::routes())
        .merge(venues::routes());

    // Debug routes exist in every build but answer 404 outside development.
    // `layer` rather than `route_layer` so wrong-method requests are hidden too.
    let dev_routes = dev::routes().layer(middleware::from_fn_with_state(
        state.clone(),
        require_development,
    ));

    if state.config.environment.is_development() {
        tracing::info!("Debug routes enabled (development mode)");
    }

    Router::new()
        .merge(public_routes)
        .merge(dev_routes)
        .fallback(not_found)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
