// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Venue listing.

use crate::error::Result;
use crate::models::Venue;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/venues", get(list_venues))
}

#[derive(Deserialize)]
struct VenuesQuery {
    /// Maximum number of venues (must be positive)
    #[serde(default = "default_limit")]
    limit: i64,
    /// Exact category match, e.g. "cafe"
    category: Option<String>,
}

fn default_limit() -> i64 {
    50
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct VenuesResponse {
    pub venues: Vec<Venue>,
    pub count: usize,
}

async fn list_venues(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VenuesQuery>,
) -> Result<Json<VenuesResponse>> {
    tracing::debug!(limit = params.limit, category = ?params.category, "Listing venues");

    let venues = state
        .db
        .list_venues(params.limit, params.category.as_deref())
        .await?;

    Ok(Json(VenuesResponse {
        count: venues.len(),
        venues,
    }))
}
