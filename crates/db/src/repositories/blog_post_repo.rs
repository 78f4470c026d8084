//! Repository for the `blog_posts` table.

use sqlx::PgPool;
use voyara_core::types::DbId;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, slug, body, author_name, image_url, is_published, \
    published_at, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// `slug` must already be resolved by the caller (derived from the title
    /// or given explicitly). `published_at` is set when the post is created
    /// as published.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBlogPost,
        slug: &str,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts \
                (title, slug, body, author_name, image_url, is_published, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, \
                     CASE WHEN $6 THEN NOW() ELSE NULL END) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.body)
            .bind(&input.author_name)
            .bind(&input.image_url)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID, regardless of publication state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published post by slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND is_published = true");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List published posts, newest published first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE is_published = true \
             ORDER BY published_at DESC, id DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// List all posts including drafts, newest first. Admin view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    ///
    /// Publishing a previously unpublished post stamps `published_at` once;
    /// re-publishing does not move it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                body = COALESCE($4, body),
                author_name = COALESCE($5, author_name),
                image_url = COALESCE($6, image_url),
                is_published = COALESCE($7, is_published),
                published_at = CASE
                    WHEN COALESCE($7, is_published) AND published_at IS NULL THEN NOW()
                    ELSE published_at
                END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.body)
            .bind(&input.author_name)
            .bind(&input.image_url)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
