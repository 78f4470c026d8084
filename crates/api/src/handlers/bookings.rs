//! Handlers for the booking lifecycle.
//!
//! Two public submission paths create bookings (the full package-booking
//! form and the landing-page quick-inquiry widget); the admin endpoints
//! list, inspect, advance, and delete them. Status transitions are checked
//! server-side against the transition table in `voyara_core::booking` --
//! the API never trusts the caller to only request legal next states.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use voyara_core::booking::{
    self, compute_total_cents, normalize_phone, parse_start_date, parse_travelers, GuestSelection,
};
use voyara_core::error::CoreError;
use voyara_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use voyara_core::types::DbId;
use voyara_core::validate::require_non_empty;
use voyara_db::models::booking::{BookingListParams, NewBooking, UpdateBookingStatus};
use voyara_db::repositories::{BookingRepo, PackageRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Status selector value that disables the status filter.
const STATUS_FILTER_ALL: &str = "all";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /bookings` (package-booking path).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub package_id: DbId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub start_date: NaiveDate,
    /// 1-10 from the bounded selector, or the `"10+"` escape value.
    pub guests: GuestSelection,
    pub special_requests: Option<String>,
}

/// Request body for `POST /bookings/inquiries` (quick-inquiry path).
///
/// Fields arrive as the widget submits them: loosely-typed strings with
/// defaults applied server-side.
#[derive(Debug, Deserialize)]
pub struct QuickInquiryRequest {
    pub location: String,
    pub date: Option<String>,
    pub travelers: Option<String>,
    pub phone: String,
}

// ---------------------------------------------------------------------------
// POST /bookings
// ---------------------------------------------------------------------------

/// Submit a full package booking.
///
/// Resolves the package, snapshots its name/type/duration/price into the
/// booking row, and computes the total as price-per-person times guest
/// count. The new booking always starts as `pending`.
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let guests = input.guests.guest_count()?;

    let package = PackageRepo::find_by_id(&state.pool, input.package_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id: input.package_id,
        }))?;

    let new_booking = NewBooking {
        customer_name: input.name,
        customer_email: input.email,
        customer_phone: input.phone,
        package_name: package.name.clone(),
        tour_type: package.tour_type.clone(),
        start_date: input.start_date,
        number_of_days: package.duration_days,
        number_of_guests: guests as i32,
        total_price_cents: compute_total_cents(package.price_per_person_cents, guests),
        special_requests: input.special_requests,
    };

    let created = BookingRepo::create(&state.pool, &new_booking).await?;

    tracing::info!(
        booking_id = created.id,
        package_id = package.id,
        guests,
        total_price_cents = created.total_price_cents,
        "Package booking submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// POST /bookings/inquiries
// ---------------------------------------------------------------------------

/// Submit a quick inquiry from the landing-page widget.
///
/// The widget captures only location, optional date, optional traveler
/// count, and a phone number. The requested location is recorded as the
/// package-name label, the price is zero, and a missing date means "as soon
/// as possible" (today). Fire-and-forget: the response carries no body.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(input): Json<QuickInquiryRequest>,
) -> AppResult<StatusCode> {
    require_non_empty("location", &input.location)?;
    let phone = normalize_phone(&input.phone)?;
    let start_date = parse_start_date(input.date.as_deref())?;
    let travelers = parse_travelers(input.travelers.as_deref());

    let new_booking = NewBooking {
        customer_name: String::new(),
        customer_email: String::new(),
        customer_phone: phone,
        package_name: input.location.trim().to_string(),
        tour_type: String::new(),
        start_date,
        number_of_days: 1,
        number_of_guests: travelers as i32,
        total_price_cents: 0,
        special_requests: None,
    };

    let created = BookingRepo::create(&state.pool, &new_booking).await?;

    tracing::info!(booking_id = created.id, "Quick inquiry submitted");

    Ok(StatusCode::CREATED)
}

// ---------------------------------------------------------------------------
// GET /admin/bookings
// ---------------------------------------------------------------------------

/// List bookings with optional status and free-text filters. Admin only.
///
/// `status=all` (or no status) disables the status filter; `q` matches
/// case-insensitively against customer name, email, and package name.
/// Ordered newest-first.
pub async fn list_bookings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> AppResult<impl IntoResponse> {
    let status_filter = params
        .status
        .as_deref()
        .filter(|s| *s != STATUS_FILTER_ALL);
    if let Some(s) = status_filter {
        booking::validate_status(s)?;
    }

    let q = params.q.as_deref().filter(|s| !s.is_empty());
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let bookings = BookingRepo::list_filtered(&state.pool, status_filter, q, limit, offset).await?;

    Ok(Json(DataResponse { data: bookings }))
}

// ---------------------------------------------------------------------------
// GET /admin/bookings/:id
// ---------------------------------------------------------------------------

/// Get a single booking by ID. Admin only.
pub async fn get_booking(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// PUT /admin/bookings/:id/status
// ---------------------------------------------------------------------------

/// Advance a booking to a new status. Admin only.
///
/// Enforces the transition table: `pending -> confirmed | cancelled`,
/// `confirmed -> completed | cancelled`; `cancelled` and `completed` are
/// terminal. Illegal requests are rejected before any write.
pub async fn update_booking_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBookingStatus>,
) -> AppResult<impl IntoResponse> {
    // Validate the target status value.
    booking::validate_status(&input.status)?;

    // Fetch the current booking to check the transition.
    let current = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    // Validate the status transition.
    booking::validate_transition(&current.status, &input.status)?;

    let updated = BookingRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    tracing::info!(
        booking_id = id,
        from = %current.status,
        to = %input.status,
        user_id = admin.user_id,
        "Booking status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/bookings/:id
// ---------------------------------------------------------------------------

/// Delete a booking. Admin only. Unconditional and irreversible.
pub async fn delete_booking(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BookingRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }));
    }

    tracing::info!(booking_id = id, user_id = admin.user_id, "Booking deleted");

    Ok(StatusCode::NO_CONTENT)
}
