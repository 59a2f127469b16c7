// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use novi_api::config::{Config, Environment};
use novi_api::db::FirestoreDb;
use novi_api::routes::create_router;
use novi_api::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Connect to the emulator through the normal credential chain.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    let config = Config::test_default();
    novi_api::db::ClientBootstrap::new(novi_api::db::provider_chain(&config))
        .firestore(Some("test-project"))
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Generate a unique document ID for test isolation.
#[allow(dead_code)]
pub fn unique_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Create a test app with an offline database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Config::test_default(), FirestoreDb::new_mock())
}

/// Create a test app in the given environment with an offline database.
#[allow(dead_code)]
pub fn create_test_app_in(environment: Environment) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        environment,
        ..Config::test_default()
    };
    create_test_app_with(config, FirestoreDb::new_mock())
}

#[allow(dead_code)]
pub fn create_test_app_with(config: Config, db: FirestoreDb) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config, db));
    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// Serve `router` on an ephemeral local port and return its base URL.
///
/// Stands in for third-party APIs in tests.
#[allow(dead_code)]
pub async fn spawn_upstream(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test upstream");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{}", addr)
}
