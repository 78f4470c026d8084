//! Repository for the `destinations` table.

use sqlx::PgPool;
use voyara_core::types::DbId;

use crate::models::destination::{CreateDestination, Destination, UpdateDestination};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, country, description, image_url, is_featured, \
    created_at, updated_at";

/// Provides CRUD operations for destinations.
pub struct DestinationRepo;

impl DestinationRepo {
    /// Insert a new destination, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDestination,
    ) -> Result<Destination, sqlx::Error> {
        let query = format!(
            "INSERT INTO destinations (name, country, description, image_url, is_featured) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a destination by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations WHERE id = $1");
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List destinations, optionally restricted to featured ones.
    /// Ordered alphabetically by name.
    pub async fn list(pool: &PgPool, featured_only: bool) -> Result<Vec<Destination>, sqlx::Error> {
        let where_clause = if featured_only {
            "WHERE is_featured = true"
        } else {
            ""
        };
        let query = format!("SELECT {COLUMNS} FROM destinations {where_clause} ORDER BY name ASC");
        sqlx::query_as::<_, Destination>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a destination. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDestination,
    ) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!(
            "UPDATE destinations SET
                name = COALESCE($2, name),
                country = COALESCE($3, country),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                is_featured = COALESCE($6, is_featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a destination. Returns `true` if a row was removed.
    ///
    /// Packages pointing at it keep existing with a NULL destination
    /// (`ON DELETE SET NULL`); bookings are unaffected by construction.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
