//! Route definitions for contact messages.
//!
//! The public submission route is mounted at `/contact`; admin management
//! routes at `/admin/messages`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Public contact route.
///
/// ```text
/// POST   /    -> submit_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact::submit_message))
}

/// Admin message routes (editor or admin role).
///
/// ```text
/// GET    /        -> list_messages (?unread_only=true)
/// GET    /{id}    -> get_message (marks read)
/// DELETE /{id}    -> delete_message
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list_messages))
        .route(
            "/{id}",
            get(contact::get_message).delete(contact::delete_message),
        )
}
