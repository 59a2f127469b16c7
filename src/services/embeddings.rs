// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OpenAI embeddings client.
//!
//! Only used for connectivity checks today; user and venue embeddings are
//! not generated yet.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// OpenAI embeddings API client.
#[derive(Clone)]
pub struct EmbeddingsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// A single embedding vector.
#[derive(Debug, Clone, Serialize)]
pub struct Embedding {
    pub model: String,
    pub vector: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    model: String,
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl EmbeddingsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Embed one piece of text.
    pub async fn embed(&self, text: &str) -> Result<Embedding, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::BadRequest("text must not be empty".to_string()));
        }

        let url = format!("{}/embeddings", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "input": text,
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("OpenAI request failed: {}", e)))?;

        let parsed: EmbeddingsResponse =
            super::check_response_json("OpenAI API", response).await?;

        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| AppError::ExternalApi("OpenAI returned no embeddings".to_string()))?;

        Ok(Embedding {
            model: parsed.model,
            vector,
        })
    }
}
