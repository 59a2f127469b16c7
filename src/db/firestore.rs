// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (preference profiles, merge-upsert)
//! - Venues (read-only listing)
//! - Dev smoke test (write + read-back of a sentinel document)

use crate::db::collections;
use crate::db::credentials::{CredentialError, CredentialSource, ResolvedCredentials};
use crate::error::AppError;
use crate::models::{User, UserUpdate, Venue};
use serde::{Deserialize, Serialize};

/// Upper bound for a single venue listing.
pub const MAX_VENUE_LIMIT: i64 = 500;

/// Document ID of the smoke-test sentinel.
pub const SMOKE_DOC_ID: &str = "firebase_client";

/// Sentinel document written by the dev smoke test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmokeDocument {
    pub ok: bool,
    pub source: String,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Connect using credentials produced by a provider.
    ///
    /// `project_override` wins over the project ID embedded in a
    /// service-account key.
    pub async fn connect(
        credentials: ResolvedCredentials,
        project_override: Option<&str>,
    ) -> Result<Self, CredentialError> {
        let project_id = project_override
            .map(str::to_string)
            .or(credentials.project_id)
            .ok_or(CredentialError::MissingProjectId)?;

        let token_source = match credentials.source {
            CredentialSource::Emulator => return Self::create_emulator_client(&project_id).await,
            CredentialSource::ServiceAccountJson(json) => gcloud_sdk::TokenSourceType::Json(json),
            CredentialSource::ServiceAccountFile(path) => gcloud_sdk::TokenSourceType::File(path),
            CredentialSource::Ambient => gcloud_sdk::TokenSourceType::Default,
        };

        let options = firestore::FirestoreDbOptions::new(project_id.clone());
        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            token_source,
        )
        .await
        .map_err(|e| CredentialError::Connect(e.to_string()))?;

        tracing::info!(
            project = %project_id,
            provider = credentials.provider,
            "Connected to Firestore"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, CredentialError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // The emulator accepts any bearer token; hand it an unsigned JWT.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| CredentialError::Connect(format!("emulator: {}", e)))?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// Input validation still runs; anything that reaches the store
    /// returns a database error.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by ID. Returns `Ok(None)` if no such document exists.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        validate_document_id(user_id)?;

        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Merge-upsert user fields.
    ///
    /// Only the fields present in `fields` are written (as an update mask);
    /// everything else already on the document is kept. Creates the
    /// document if it does not exist. `updated_at` is always stamped.
    pub async fn save_user(&self, user_id: &str, fields: &UserUpdate) -> Result<(), AppError> {
        validate_document_id(user_id)?;
        if fields.is_empty() {
            return Err(AppError::BadRequest(
                "save_user: no fields to write".to_string(),
            ));
        }

        let mut update = fields.clone();
        update.updated_at = Some(chrono::Utc::now().to_rfc3339());
        let mask = update.field_names();

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(mask.iter().copied())
            .in_col(collections::USERS)
            .document_id(user_id)
            .object(&update)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(user_id, fields = ?mask, "User saved");
        Ok(())
    }

    // ─── Venue Operations ────────────────────────────────────────

    /// List up to `limit` venues, optionally filtered by exact category.
    ///
    /// Each venue carries its Firestore document ID in `doc_id`.
    pub async fn list_venues(
        &self,
        limit: i64,
        category: Option<&str>,
    ) -> Result<Vec<Venue>, AppError> {
        let limit = validate_venue_limit(limit)?;

        let query = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::VENUES);

        let query = match category.filter(|c| !c.is_empty()) {
            Some(category) => {
                let category = category.to_string();
                query.filter(move |q| q.field("category").eq(category.clone()))
            }
            None => query,
        };

        query
            .limit(limit)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Dev Smoke Test ──────────────────────────────────────────

    /// Write the sentinel document (merge) and read it back.
    ///
    /// Touches only the `dev_smoke_tests` collection.
    pub async fn smoke_test(&self) -> Result<SmokeDocument, AppError> {
        let client = self.get_client()?;
        let sentinel = SmokeDocument {
            ok: true,
            source: "api_smoke_test".to_string(),
        };

        let _: () = client
            .fluent()
            .update()
            .fields(["ok", "source"])
            .in_col(collections::DEV_SMOKE_TESTS)
            .document_id(SMOKE_DOC_ID)
            .object(&sentinel)
            .execute()
            .await
            .map_err(|e| AppError::Database(format!("Smoke test write failed: {}", e)))?;

        let stored: Option<SmokeDocument> = client
            .fluent()
            .select()
            .by_id_in(collections::DEV_SMOKE_TESTS)
            .obj()
            .one(SMOKE_DOC_ID)
            .await
            .map_err(|e| AppError::Database(format!("Smoke test read failed: {}", e)))?;

        stored.ok_or_else(|| {
            AppError::Database("Smoke test failed: document not found after write".to_string())
        })
    }
}

/// Reject IDs Firestore cannot address as a single document.
fn validate_document_id(id: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("Document ID must not be empty".to_string()));
    }
    if id.contains('/') || id == "." || id == ".." {
        return Err(AppError::BadRequest(format!("Invalid document ID: {:?}", id)));
    }
    Ok(())
}

/// Check a venue limit and convert it for the query builder.
pub fn validate_venue_limit(limit: i64) -> Result<u32, AppError> {
    if limit <= 0 {
        return Err(AppError::BadRequest(format!(
            "limit must be a positive integer, got {}",
            limit
        )));
    }
    if limit > MAX_VENUE_LIMIT {
        return Err(AppError::BadRequest(format!(
            "limit must be at most {}",
            MAX_VENUE_LIMIT
        )));
    }
    Ok(limit as u32)
}
