//! HTTP-level integration tests for the blog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete_auth, editor_token, get, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_derives_slug_from_title(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/admin/blog",
        &token,
        json!({
            "title": "Ten Days in Patagonia",
            "body": "Day one...",
            "author_name": "Maria",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let post = body_json(response).await;
    assert_eq!(post["slug"], "ten-days-in-patagonia");
    assert_eq!(post["is_published"], false);
    assert!(post["published_at"].is_null());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_drafts_are_invisible_publicly(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/admin/blog",
            &token,
            json!({ "title": "Hidden Draft" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Public list is empty; the slug 404s.
    let body = body_json(get(app.clone(), "/api/v1/blog").await).await;
    assert!(body.as_array().unwrap().is_empty());

    let response = get(app.clone(), "/api/v1/blog/hidden-draft").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The admin list still shows it.
    let body = body_json(get_auth(app, "/api/v1/admin/blog", &token).await).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_publishing_exposes_post_and_stamps_published_at(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/admin/blog",
            &token,
            json!({ "title": "Lisbon Food Guide", "body": "Eat here." }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Publish.
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/blog/{id}"),
        &token,
        json!({ "is_published": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let published = body_json(response).await;
    assert!(!published["published_at"].is_null());

    // Now publicly visible by list and slug.
    let body = body_json(get(app.clone(), "/api/v1/blog").await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/blog/lisbon-food-guide").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Lisbon Food Guide");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_slug_is_conflict(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/blog",
        &token,
        json!({ "title": "Same Title" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        app,
        "/api/v1/admin/blog",
        &token,
        json!({ "title": "Same Title" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_post(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/admin/blog",
            &token,
            json!({ "title": "Short Lived" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/v1/admin/blog/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/admin/blog/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
