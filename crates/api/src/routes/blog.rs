//! Route definitions for the blog.
//!
//! Public routes (published posts only) are mounted at `/blog`; admin CRUD
//! routes at `/admin/blog`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Public blog routes.
///
/// ```text
/// GET    /          -> list_published
/// GET    /{slug}    -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_published))
        .route("/{slug}", get(blog::get_by_slug))
}

/// Admin blog routes (editor or admin role). Includes drafts.
///
/// ```text
/// GET    /        -> list_all
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_all).post(blog::create))
        .route(
            "/{id}",
            get(blog::get_by_id).put(blog::update).delete(blog::delete),
        )
}
