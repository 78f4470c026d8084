//! Handler for admin image uploads.
//!
//! Accepts a multipart form with a required `file` field, validates that it
//! is a real image, stores it under the configured media root with a
//! generated name, and returns the public URL it will be served from.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Supported image file extensions for upload.
const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Response payload for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL the image is served from.
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// POST /api/v1/admin/uploads
///
/// Accepts a multipart form with a required `file` field. The upload is
/// validated by decoding its header (dimensions come out of that read) and
/// persisted under `MEDIA_ROOT` with a UUID filename.
pub async fn upload_image(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("upload.png").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
        }
        // ignore unknown fields
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    // Validate file extension.
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    if !SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported file extension '{ext}'. Supported: {SUPPORTED_IMAGE_EXTENSIONS:?}"
        )));
    }

    // Header-only decode: cheap validation that the payload really is an
    // image, and yields its dimensions.
    let (width, height) = image::ImageReader::new(std::io::Cursor::new(&data))
        .with_guessed_format()
        .map_err(|e| AppError::BadRequest(format!("Unreadable image data: {e}")))?
        .into_dimensions()
        .map_err(|e| AppError::BadRequest(format!("Invalid image data: {e}")))?;

    let stored_name = format!("{}.{ext}", Uuid::new_v4());
    let path = state.config.media_root.join(&stored_name);

    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(
        user_id = user.user_id,
        stored_name = %stored_name,
        size_bytes = data.len(),
        "Image uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse {
                url: format!("/media/{stored_name}"),
                width,
                height,
            },
        }),
    ))
}
