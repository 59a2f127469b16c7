// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod embeddings;
pub mod onboarding;
pub mod places;

pub use embeddings::{Embedding, EmbeddingsClient};
pub use onboarding::{generate_user_id, onboard_user, Onboarding};
pub use places::PlacesClient;

use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Check an upstream response and parse its JSON body.
///
/// `api` names the upstream in error messages.
pub(crate) async fn check_response_json<T: DeserializeOwned>(
    api: &str,
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        if status.as_u16() == 429 {
            tracing::warn!(api, "Upstream rate limit hit (429)");
        }

        return Err(AppError::ExternalApi(format!(
            "{} returned HTTP {}: {}",
            api, status, body
        )));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::ExternalApi(format!("{} JSON parse error: {}", api, e)))
}
