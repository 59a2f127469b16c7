// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Novi API: backend for AI-assisted solo travel decisions.
//!
//! This crate provides user onboarding, venue listing on top of Firestore,
//! and thin clients for the Google Places and OpenAI APIs.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{EmbeddingsClient, PlacesClient};

/// Service name reported by health checks.
pub const SERVICE_NAME: &str = "novi-api";

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub places: PlacesClient,
    pub embeddings: EmbeddingsClient,
}

impl AppState {
    /// Build state from config and an already connected database handle.
    pub fn new(config: Config, db: FirestoreDb) -> Self {
        let places = PlacesClient::new(
            config.places_api_base_url.clone(),
            config.google_places_api_key.clone(),
        );
        let embeddings = EmbeddingsClient::new(
            config.openai_api_base_url.clone(),
            config.openai_api_key.clone(),
            config.openai_embedding_model.clone(),
        );

        Self {
            config,
            db,
            places,
            embeddings,
        }
    }
}
