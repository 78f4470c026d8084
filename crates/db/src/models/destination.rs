//! Destination entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voyara_core::types::{DbId, Timestamp};

/// A row from the `destinations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Destination {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new destination.
#[derive(Debug, Deserialize)]
pub struct CreateDestination {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// DTO for updating a destination. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateDestination {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
}
