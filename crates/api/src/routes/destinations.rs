//! Route definitions for destinations.
//!
//! Public read-only routes are mounted at `/destinations`; admin CRUD
//! routes at `/admin/destinations`.

use axum::routing::get;
use axum::Router;

use crate::handlers::destinations;
use crate::state::AppState;

/// Public destination routes.
///
/// ```text
/// GET    /        -> list (?featured=true)
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(destinations::list))
        .route("/{id}", get(destinations::get_by_id))
}

/// Admin destination routes (editor or admin role).
///
/// ```text
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(destinations::create))
        .route(
            "/{id}",
            axum::routing::put(destinations::update).delete(destinations::delete),
        )
}
