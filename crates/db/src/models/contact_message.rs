//! Contact message entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voyara_core::types::{DbId, Timestamp};

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new contact message.
#[derive(Debug, Deserialize)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// Query parameters for the admin message list.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
