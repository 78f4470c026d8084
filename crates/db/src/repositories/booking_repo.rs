//! Repository for the `bookings` table.

use sqlx::PgPool;
use voyara_core::types::DbId;

use crate::models::booking::{Booking, NewBooking};

/// Column list for `bookings` queries.
const COLUMNS: &str = "\
    id, customer_name, customer_email, customer_phone, package_name, \
    tour_type, start_date, number_of_days, number_of_guests, \
    total_price_cents, status, special_requests, created_at, updated_at";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking with status `pending`, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
                (customer_name, customer_email, customer_phone, package_name, \
                 tour_type, start_date, number_of_days, number_of_guests, \
                 total_price_cents, special_requests) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(&input.customer_phone)
            .bind(&input.package_name)
            .bind(&input.tour_type)
            .bind(input.start_date)
            .bind(input.number_of_days)
            .bind(input.number_of_guests)
            .bind(input.total_price_cents)
            .bind(&input.special_requests)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings with optional status and free-text filters.
    ///
    /// The text filter is a case-insensitive substring match over customer
    /// name, customer email, and package name. Results are ordered
    /// newest-first.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        q: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if q.is_some() {
            conditions.push(format!(
                "(customer_name ILIKE ${param_idx} \
                  OR customer_email ILIKE ${param_idx} \
                  OR package_name ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM bookings {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut query_builder = sqlx::query_as::<_, Booking>(&query);

        if let Some(s) = status {
            query_builder = query_builder.bind(s.to_string());
        }
        if let Some(text) = q {
            query_builder = query_builder.bind(format!("%{text}%"));
        }
        query_builder = query_builder.bind(limit).bind(offset);

        query_builder.fetch_all(pool).await
    }

    /// Update the status of a booking. Returns the updated row if found.
    ///
    /// The transition guard is the caller's responsibility; this method only
    /// writes the new value and advances `updated_at`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET status = $1, updated_at = NOW() \
             WHERE id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(new_status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a booking. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
