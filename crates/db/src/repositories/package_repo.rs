//! Repository for the `packages` table.

use sqlx::PgPool;
use voyara_core::types::DbId;

use crate::models::package::{CreatePackage, Package, UpdatePackage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, destination_id, name, tour_type, description, \
    price_per_person_cents, duration_days, image_url, is_featured, \
    created_at, updated_at";

/// Provides CRUD operations for tour packages.
pub struct PackageRepo;

impl PackageRepo {
    /// Insert a new package, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let query = format!(
            "INSERT INTO packages \
                (destination_id, name, tour_type, description, \
                 price_per_person_cents, duration_days, image_url, is_featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(input.destination_id)
            .bind(&input.name)
            .bind(&input.tour_type)
            .bind(&input.description)
            .bind(input.price_per_person_cents)
            .bind(input.duration_days)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a package by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages WHERE id = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List packages with optional destination, tour-type, and text filters.
    ///
    /// The text filter is a case-insensitive substring match over name and
    /// description. Ordered newest-first.
    pub async fn list_filtered(
        pool: &PgPool,
        destination_id: Option<DbId>,
        tour_type: Option<&str>,
        q: Option<&str>,
    ) -> Result<Vec<Package>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if destination_id.is_some() {
            conditions.push(format!("destination_id = ${param_idx}"));
            param_idx += 1;
        }
        if tour_type.is_some() {
            conditions.push(format!("tour_type = ${param_idx}"));
            param_idx += 1;
        }
        if q.is_some() {
            conditions.push(format!(
                "(name ILIKE ${param_idx} OR description ILIKE ${param_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM packages {where_clause} ORDER BY created_at DESC, id DESC"
        );

        let mut query_builder = sqlx::query_as::<_, Package>(&query);

        if let Some(dest) = destination_id {
            query_builder = query_builder.bind(dest);
        }
        if let Some(t) = tour_type {
            query_builder = query_builder.bind(t.to_string());
        }
        if let Some(text) = q {
            query_builder = query_builder.bind(format!("%{text}%"));
        }

        query_builder.fetch_all(pool).await
    }

    /// Update a package. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!(
            "UPDATE packages SET
                destination_id = COALESCE($2, destination_id),
                name = COALESCE($3, name),
                tour_type = COALESCE($4, tour_type),
                description = COALESCE($5, description),
                price_per_person_cents = COALESCE($6, price_per_person_cents),
                duration_days = COALESCE($7, duration_days),
                image_url = COALESCE($8, image_url),
                is_featured = COALESCE($9, is_featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(input.destination_id)
            .bind(&input.name)
            .bind(&input.tour_type)
            .bind(&input.description)
            .bind(input.price_per_person_cents)
            .bind(input.duration_days)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a package. Returns `true` if a row was removed.
    ///
    /// Existing bookings keep their `package_name` snapshot and are not
    /// touched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
