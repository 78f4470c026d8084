//! Route definition for admin image uploads.
//!
//! Mounted at `/admin/uploads` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Upload routes (editor or admin role).
///
/// ```text
/// POST   /    -> upload_image (multipart, required `file` field)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(uploads::upload_image))
}
