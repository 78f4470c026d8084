//! Route definitions for the booking lifecycle.
//!
//! The public submission routes are mounted at `/bookings`; admin
//! management routes at `/admin/bookings` (admin role only).

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Public booking submission routes.
///
/// ```text
/// POST   /             -> submit_booking (package-booking path)
/// POST   /inquiries    -> submit_inquiry (quick-inquiry path)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(bookings::submit_booking))
        .route("/inquiries", post(bookings::submit_inquiry))
}

/// Admin booking routes (admin role only).
///
/// ```text
/// GET    /                -> list_bookings (?status=&q=&limit=&offset=)
/// GET    /{id}            -> get_booking
/// PUT    /{id}/status     -> update_booking_status
/// DELETE /{id}            -> delete_booking
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list_bookings))
        .route(
            "/{id}",
            get(bookings::get_booking).delete(bookings::delete_booking),
        )
        .route("/{id}/status", put(bookings::update_booking_status))
}
