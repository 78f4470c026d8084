//! Tour package entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voyara_core::types::{DbId, Timestamp};

/// A row from the `packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Package {
    pub id: DbId,
    pub destination_id: Option<DbId>,
    pub name: String,
    pub tour_type: String,
    pub description: String,
    pub price_per_person_cents: i64,
    pub duration_days: i32,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new package.
#[derive(Debug, Deserialize)]
pub struct CreatePackage {
    pub destination_id: Option<DbId>,
    pub name: String,
    #[serde(default)]
    pub tour_type: String,
    #[serde(default)]
    pub description: String,
    pub price_per_person_cents: i64,
    pub duration_days: i32,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// DTO for updating a package. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdatePackage {
    pub destination_id: Option<DbId>,
    pub name: Option<String>,
    pub tour_type: Option<String>,
    pub description: Option<String>,
    pub price_per_person_cents: Option<i64>,
    pub duration_days: Option<i32>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
}

/// Query parameters for the public package list.
#[derive(Debug, Deserialize)]
pub struct PackageListParams {
    pub destination_id: Option<DbId>,
    pub tour_type: Option<String>,
    /// Case-insensitive substring over name and description.
    pub q: Option<String>,
}
