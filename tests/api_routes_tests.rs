// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public route tests (offline database).

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_check() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "novi-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_banner() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Novi API");
    assert_eq!(body["docs"], "/docs");
    assert_eq!(body["health"], "/health");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_venues_reject_non_positive_limit() {
    for limit in ["0", "-1", "-100"] {
        let (app, _) = common::create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/venues?limit={}", limit))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "limit={}", limit);
        let body = common::body_json(response).await;
        assert_eq!(body["error"], "bad_request");
    }
}

#[tokio::test]
async fn test_venues_reject_oversized_and_malformed_limit() {
    for query in ["limit=501", "limit=ten"] {
        let (app, _) = common::create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/venues?{}", query))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", query);
    }
}

#[tokio::test]
async fn test_database_errors_do_not_leak_details() {
    let (app, _) = common::create_test_app();

    // Valid query reaches the offline database
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/venues?limit=10&category=cafe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_security_headers_on_api_responses() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("X-Frame-Options").unwrap(), "DENY");
}
