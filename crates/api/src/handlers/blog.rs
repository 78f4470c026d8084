//! Handlers for the `/blog` resource.
//!
//! Blog posts have two scopes:
//! - Public (published posts only): `/blog[/{slug}]`
//! - Admin (CRUD incl. drafts):     `/admin/blog[/{id}]`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use voyara_core::error::CoreError;
use voyara_core::slug::slugify;
use voyara_core::validate::require_non_empty;
use voyara_core::types::DbId;
use voyara_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use voyara_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/blog
///
/// Published posts only, newest published first.
pub async fn list_published(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list_published(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/v1/blog/{slug}
///
/// Drafts are invisible here; an unpublished slug is a 404.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No published post with slug '{slug}'")))?;
    Ok(Json(post))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/blog
///
/// All posts including drafts, newest first.
pub async fn list_all(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list_all(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/v1/admin/blog/{id}
pub async fn get_by_id(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;
    Ok(Json(post))
}

/// POST /api/v1/admin/blog
///
/// The slug is derived from the title unless given explicitly. A title that
/// yields an empty slug is rejected; a duplicate slug surfaces as 409 via
/// the `uq_blog_posts_slug` constraint.
pub async fn create(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    require_non_empty("title", &input.title)?;

    let slug = match &input.slug {
        Some(s) => s.clone(),
        None => slugify(&input.title),
    };
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title yields an empty slug; provide a slug explicitly".into(),
        )));
    }

    let post = BlogPostRepo::create(&state.pool, &input, &slug).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/v1/admin/blog/{id}
pub async fn update(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    if let Some(slug) = &input.slug {
        if slug.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "slug must not be empty".into(),
            )));
        }
    }

    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;
    Ok(Json(post))
}

/// DELETE /api/v1/admin/blog/{id}
pub async fn delete(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BlogPostRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))
    }
}
