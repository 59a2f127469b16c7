// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User routes: onboarding and preference profile access.

use crate::error::{AppError, Result};
use crate::models::{User, UserPreferences, UserUpdate};
use crate::services::onboard_user;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user/onboard", post(onboard))
        .route("/api/user/{user_id}", get(get_user).patch(update_user))
}

// ─── Onboarding ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct OnboardingRequest {
    pub preferences: UserPreferences,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "frontend/lib/generated/")
)]
pub struct OnboardingResponse {
    pub user_id: String,
    pub status: String,
    pub preferences: UserPreferences,
}

/// Register preferences and hand out a temporary user ID.
///
/// Nothing is persisted yet: the ID is not checked against existing users
/// and no preference embedding is computed.
async fn onboard(
    payload: std::result::Result<Json<OnboardingRequest>, JsonRejection>,
) -> Result<Json<OnboardingResponse>> {
    let Json(request) = payload?;
    request
        .preferences
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let onboarding = onboard_user(request.preferences);

    Ok(Json(OnboardingResponse {
        user_id: onboarding.user_id,
        status: "onboarded".to_string(),
        preferences: onboarding.preferences,
    }))
}

// ─── Profile ─────────────────────────────────────────────────

/// Get a stored user profile.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>> {
    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    Ok(Json(user))
}

/// Merge the supplied preference fields into a user profile.
///
/// Creates the profile if it does not exist; fields not in the body are
/// left as they were.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    payload: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(body) = payload?;
    let update = UserUpdate::from_json(body)?;

    state.db.save_user(&user_id, &update).await?;
    tracing::info!(user_id = %user_id, fields = ?update.field_names(), "User preferences updated");

    let user = state.db.get_user(&user_id).await?.ok_or_else(|| {
        AppError::Database(format!("User {} missing after save", user_id))
    })?;

    Ok(Json(user))
}
