//! Blog post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voyara_core::types::{DbId, Timestamp};

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author_name: String,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blog post. The slug is derived from the title by
/// the handler unless given explicitly.
#[derive(Debug, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author_name: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

/// DTO for updating a blog post. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub author_name: Option<String>,
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
}
