//! HTTP-level integration tests for the contact endpoints.
//!
//! The test environment has no SMTP configured, so submissions exercise the
//! "mailer disabled" path: the message is stored and the request succeeds
//! without any notification attempt.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete_auth, editor_token, get_auth, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_submit_contact_message(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/contact",
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "subject": "Group discounts",
            "message": "Do you offer discounts for groups of 8?",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Jane Doe");
    assert_eq!(body["data"]["is_read"], false);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_submit_rejects_missing_fields(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/contact",
        json!({ "name": "", "email": "jane@example.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/v1/contact",
        json!({ "name": "Jane", "email": "jane@example.com", "message": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_admin_list_unread_filter_and_read_marking(pool: PgPool) {
    let app = build_test_app(pool.clone());

    for i in 1..=2 {
        let response = post_json(
            app.clone(),
            "/api/v1/contact",
            json!({
                "name": format!("Visitor {i}"),
                "email": format!("v{i}@example.com"),
                "message": "Hello",
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let token = editor_token(&pool, app.clone()).await;

    let body = body_json(
        get_auth(app.clone(), "/api/v1/admin/messages?unread_only=true", &token).await,
    )
    .await;
    let items = body["data"].as_array().unwrap().clone();
    assert_eq!(items.len(), 2);
    let first_id = items[0]["id"].as_i64().unwrap();

    // Opening a message marks it read.
    let response = get_auth(
        app.clone(),
        &format!("/api/v1/admin/messages/{first_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_read"], true);

    let body = body_json(
        get_auth(app, "/api/v1/admin/messages?unread_only=true", &token).await,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_admin_delete_message(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/contact",
            json!({ "name": "Jane", "email": "jane@example.com", "message": "Bye" }),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let token = editor_token(&pool, app.clone()).await;
    let response = delete_auth(app.clone(), &format!("/api/v1/admin/messages/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/admin/messages/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_admin_messages_require_auth(pool: PgPool) {
    let app = build_test_app(pool);
    let response = common::get(app, "/api/v1/admin/messages").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
