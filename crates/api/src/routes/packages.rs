//! Route definitions for tour packages.
//!
//! Public read-only routes are mounted at `/packages`; admin CRUD routes
//! at `/admin/packages`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::packages;
use crate::state::AppState;

/// Public package routes.
///
/// ```text
/// GET    /        -> list (?destination_id=&tour_type=&q=)
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packages::list))
        .route("/{id}", get(packages::get_by_id))
}

/// Admin package routes (editor or admin role).
///
/// ```text
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(packages::create))
        .route("/{id}", put(packages::update).delete(packages::delete))
}
