//! Handlers for the `/destinations` resource.
//!
//! Destinations have two scopes:
//! - Public (read-only): `/destinations[/{id}]`
//! - Admin (CRUD):       `/admin/destinations[/{id}]`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use voyara_core::error::CoreError;
use voyara_core::types::DbId;
use voyara_core::validate::require_non_empty;
use voyara_db::models::destination::{CreateDestination, Destination, UpdateDestination};
use voyara_db::repositories::DestinationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// Query parameters for the public destination list.
#[derive(Debug, Deserialize)]
pub struct DestinationListParams {
    #[serde(default)]
    pub featured: bool,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/destinations
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DestinationListParams>,
) -> AppResult<Json<Vec<Destination>>> {
    let destinations = DestinationRepo::list(&state.pool, params.featured).await?;
    Ok(Json(destinations))
}

/// GET /api/v1/destinations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Destination>> {
    let destination = DestinationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))?;
    Ok(Json(destination))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/destinations
pub async fn create(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateDestination>,
) -> AppResult<(StatusCode, Json<Destination>)> {
    require_non_empty("name", &input.name)?;
    require_non_empty("country", &input.country)?;

    let destination = DestinationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(destination)))
}

/// PUT /api/v1/admin/destinations/{id}
pub async fn update(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDestination>,
) -> AppResult<Json<Destination>> {
    let destination = DestinationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))?;
    Ok(Json(destination))
}

/// DELETE /api/v1/admin/destinations/{id}
pub async fn delete(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DestinationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))
    }
}
