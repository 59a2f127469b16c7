// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gate for development-only routes.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Middleware that hides a route outside development.
///
/// Responds exactly like an unknown route, so non-development deployments
/// do not reveal that the debug routes exist.
pub async fn require_development(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.environment.is_development() {
        tracing::debug!(
            path = %request.uri().path(),
            environment = state.config.environment.as_str(),
            "Dev route requested outside development"
        );
        return AppError::NotFound("Not found".to_string()).into_response();
    }

    next.run(request).await
}
