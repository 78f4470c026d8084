//! Integration tests for the admin image upload endpoint.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use common::{body_json, build_test_app, editor_token};
use sqlx::PgPool;
use tower::ServiceExt;

/// A valid 1x1 RGBA PNG.
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR length + type
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4, // bit depth, color, CRC
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, // IDAT
    0x54, 0x78, 0xDA, 0x63, 0x64, 0x60, 0xF8, 0x5F, //
    0x0F, 0x00, 0x02, 0x87, 0x01, 0x80, 0xEB, 0x47, //
    0xBA, 0x92, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, // IEND
    0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

const BOUNDARY: &str = "test-boundary";

fn multipart_body(field_name: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; \
             name=\"{field_name}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn upload(app: Router, token: &str, field: &str, filename: &str, content: &[u8]) -> axum::http::Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/uploads")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, filename, content)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_upload_png_returns_public_url_and_dimensions(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let response = upload(app, &token, "file", "photo.png", TINY_PNG).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let url = body["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("/media/"));
    assert!(url.ends_with(".png"));
    assert_eq!(body["data"]["width"], 1);
    assert_eq!(body["data"]["height"], 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_upload_rejects_unsupported_extension(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let response = upload(app, &token, "file", "video.mp4", TINY_PNG).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_upload_rejects_non_image_payload(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let response = upload(app, &token, "file", "fake.png", b"this is not an image").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_upload_requires_file_field(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = editor_token(&pool, app.clone()).await;

    let response = upload(app, &token, "attachment", "photo.png", TINY_PNG).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
