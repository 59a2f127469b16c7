// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.
//! Required values are checked once at startup so the server never runs
//! half-configured.

use std::env;
use std::path::PathBuf;

/// Default location of the service-account key for local development.
pub const DEFAULT_CREDENTIALS_PATH: &str = "./firebase-service-account.json";

/// Deployment environment. Only `Development` exposes the debug routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Parse an `ENVIRONMENT` value.
    ///
    /// Only the exact value `development` enables the debug routes; aliases,
    /// other casings and unknown names are treated as production.
    pub fn parse(value: &str) -> Self {
        match value {
            "development" => Environment::Development,
            "staging" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Required API keys ---
    /// Google Places API key
    pub google_places_api_key: String,
    /// OpenAI API key (embeddings)
    pub openai_api_key: String,

    // --- Firestore credentials (all optional, resolved in order) ---
    /// Base64-encoded service-account JSON
    pub firebase_credentials_base64: Option<String>,
    /// Path to a service-account JSON file
    pub firebase_credentials_path: PathBuf,
    /// GCP project ID override
    pub gcp_project_id: Option<String>,

    // --- Server ---
    pub environment: Environment,
    pub host: String,
    pub port: u16,

    // --- External API endpoints ---
    pub places_api_base_url: String,
    pub openai_api_base_url: String,
    pub openai_embedding_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            google_places_api_key: required("GOOGLE_PLACES_API_KEY")?,
            openai_api_key: required("OPENAI_API_KEY")?,

            firebase_credentials_base64: optional("FIREBASE_CREDENTIALS_BASE64"),
            firebase_credentials_path: optional("FIREBASE_CREDENTIALS_PATH")
                .unwrap_or_else(|| DEFAULT_CREDENTIALS_PATH.to_string())
                .into(),
            gcp_project_id: optional("GCP_PROJECT_ID").or_else(|| optional("GOOGLE_CLOUD_PROJECT")),

            environment: optional("ENVIRONMENT")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Development),
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match optional("PORT") {
                Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    name: "PORT",
                    value: raw,
                })?,
                None => 8000,
            },

            places_api_base_url: optional("PLACES_API_BASE_URL")
                .unwrap_or_else(|| "https://places.googleapis.com/v1".to_string()),
            openai_api_base_url: optional("OPENAI_API_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            openai_embedding_model: optional("OPENAI_EMBEDDING_MODEL")
                .unwrap_or_else(|| "text-embedding-3-small".to_string()),
        })
    }

    /// Config for tests: development mode, no credentials, local endpoints.
    pub fn test_default() -> Self {
        Self {
            google_places_api_key: "test_places_key".to_string(),
            openai_api_key: "test_openai_key".to_string(),
            firebase_credentials_base64: None,
            firebase_credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            gcp_project_id: Some("test-project".to_string()),
            environment: Environment::Development,
            host: "127.0.0.1".to_string(),
            port: 8000,
            places_api_base_url: "http://127.0.0.1:9".to_string(),
            openai_api_base_url: "http://127.0.0.1:9".to_string(),
            openai_embedding_model: "text-embedding-3-small".to_string(),
        }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a required variable; blank values count as missing.
fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
