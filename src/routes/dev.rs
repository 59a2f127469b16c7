// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Development-only diagnostics.
//!
//! Gated by `require_development` in routes/mod.rs. These routes only touch
//! the `dev_smoke_tests` collection and never write user or venue data.

use crate::db::firestore::SmokeDocument;
use crate::error::Result;
use crate::models::Venue;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dev/firestore-smoke", post(firestore_smoke))
        .route("/api/dev/places-search", post(places_search))
        .route("/api/dev/embeddings-smoke", post(embeddings_smoke))
}

#[derive(Serialize)]
pub struct SmokeResponse {
    pub status: String,
    pub data: SmokeDocument,
}

/// Verify Firestore write + read-back against a sentinel document.
async fn firestore_smoke(State(state): State<Arc<AppState>>) -> Result<Json<SmokeResponse>> {
    let data = state.db.smoke_test().await?;
    tracing::info!("Firestore smoke test passed");

    Ok(Json(SmokeResponse {
        status: "ok".to_string(),
        data,
    }))
}

#[derive(Deserialize)]
struct PlacesSearchRequest {
    query: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

fn default_category() -> String {
    "restaurant".to_string()
}

fn default_page_size() -> u32 {
    5
}

#[derive(Serialize)]
pub struct PlacesSearchResponse {
    pub venues: Vec<Venue>,
}

/// Run a Places text search and show the normalized venues.
async fn places_search(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<PlacesSearchRequest>, JsonRejection>,
) -> Result<Json<PlacesSearchResponse>> {
    let Json(request) = payload?;
    let venues = state
        .places
        .search_venues(&request.query, &request.category, request.page_size)
        .await?;

    Ok(Json(PlacesSearchResponse { venues }))
}

#[derive(Deserialize)]
struct EmbeddingsSmokeRequest {
    text: String,
}

#[derive(Serialize)]
pub struct EmbeddingsSmokeResponse {
    pub model: String,
    pub dimensions: usize,
}

/// Embed a sample text and report the vector size.
async fn embeddings_smoke(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<EmbeddingsSmokeRequest>, JsonRejection>,
) -> Result<Json<EmbeddingsSmokeResponse>> {
    let Json(request) = payload?;
    let embedding = state.embeddings.embed(&request.text).await?;

    Ok(Json(EmbeddingsSmokeResponse {
        model: embedding.model,
        dimensions: embedding.vector.len(),
    }))
}
