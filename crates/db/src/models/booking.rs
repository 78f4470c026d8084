//! Booking entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voyara_core::types::{DbId, Timestamp};

/// A row from the `bookings` table.
///
/// `package_name` and `tour_type` are snapshot strings taken at submission
/// time, not references into the catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub package_name: String,
    pub tour_type: String,
    pub start_date: NaiveDate,
    pub number_of_days: i32,
    pub number_of_guests: i32,
    pub total_price_cents: i64,
    pub status: String,
    pub special_requests: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fully assembled booking row for insertion.
///
/// Built by the submission handlers after validation and price computation;
/// both entry paths produce this shape. Status is always `pending` on insert.
#[derive(Debug)]
pub struct NewBooking {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub package_name: String,
    pub tour_type: String,
    pub start_date: NaiveDate,
    pub number_of_days: i32,
    pub number_of_guests: i32,
    pub total_price_cents: i64,
    pub special_requests: Option<String>,
}

/// DTO for updating a booking's status.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: String,
}

/// Query parameters for the admin booking list.
#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    /// `all` (or absent) disables the status filter.
    pub status: Option<String>,
    /// Case-insensitive substring over customer name, email, and package name.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
