//! HTTP-level integration tests for the `/auth` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, post_json_auth, seed_user, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_login_returns_tokens_and_user_info(pool: PgPool) {
    seed_user(&pool, "alice", "admin").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "alice", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert!(!body["refresh_token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "admin");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_login_with_wrong_password_is_401(pool: PgPool) {
    seed_user(&pool, "alice", "admin").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "alice", "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_login_with_unknown_user_is_401(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "ghost", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_repeated_failures_lock_the_account(pool: PgPool) {
    seed_user(&pool, "alice", "admin").await;

    let app = build_test_app(pool);

    // Five consecutive failures trip the lock.
    for _ in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/auth/login",
            json!({ "username": "alice", "password": "wrong" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the correct password is rejected while locked.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "alice", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_refresh_rotates_the_token(pool: PgPool) {
    seed_user(&pool, "alice", "admin").await;

    let app = build_test_app(pool);
    let login_body = body_json(
        post_json(
            app.clone(),
            "/api/v1/auth/login",
            json!({ "username": "alice", "password": TEST_PASSWORD }),
        )
        .await,
    )
    .await;
    let refresh_token = login_body["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and returns a new refresh token.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert_ne!(refreshed["refresh_token"].as_str(), Some(refresh_token.as_str()));

    // The consumed refresh token is revoked (rotation).
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_logout_revokes_refresh_tokens(pool: PgPool) {
    seed_user(&pool, "alice", "admin").await;

    let app = build_test_app(pool);
    let login_body = body_json(
        post_json(
            app.clone(),
            "/api/v1/auth/login",
            json!({ "username": "alice", "password": TEST_PASSWORD }),
        )
        .await,
    )
    .await;
    let access_token = login_body["access_token"].as_str().unwrap().to_string();
    let refresh_token = login_body["refresh_token"].as_str().unwrap().to_string();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        &access_token,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token no longer works.
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_protected_route_rejects_garbage_token(pool: PgPool) {
    let app = build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/admin/bookings", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
