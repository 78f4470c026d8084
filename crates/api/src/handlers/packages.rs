//! Handlers for the `/packages` resource.
//!
//! Packages have two scopes:
//! - Public (read-only, filtered): `/packages[/{id}]`
//! - Admin (CRUD):                 `/admin/packages[/{id}]`

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use voyara_core::error::CoreError;
use voyara_core::types::DbId;
use voyara_core::validate::require_non_empty;
use voyara_db::models::package::{CreatePackage, Package, PackageListParams, UpdatePackage};
use voyara_db::repositories::PackageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/packages
///
/// Supports `?destination_id=`, `?tour_type=`, and `?q=` (case-insensitive
/// substring over name and description).
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PackageListParams>,
) -> AppResult<Json<Vec<Package>>> {
    let q = params.q.as_deref().filter(|s| !s.is_empty());
    let tour_type = params.tour_type.as_deref().filter(|s| !s.is_empty());

    let packages =
        PackageRepo::list_filtered(&state.pool, params.destination_id, tour_type, q).await?;
    Ok(Json(packages))
}

/// GET /api/v1/packages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Package>> {
    let package = PackageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;
    Ok(Json(package))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/packages
pub async fn create(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreatePackage>,
) -> AppResult<(StatusCode, Json<Package>)> {
    require_non_empty("name", &input.name)?;
    validate_pricing(input.price_per_person_cents, input.duration_days)?;

    let package = PackageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// PUT /api/v1/admin/packages/{id}
pub async fn update(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePackage>,
) -> AppResult<Json<Package>> {
    validate_pricing(
        input.price_per_person_cents.unwrap_or(0),
        input.duration_days.unwrap_or(1),
    )?;

    let package = PackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;
    Ok(Json(package))
}

/// DELETE /api/v1/admin/packages/{id}
///
/// Existing bookings keep their snapshot of this package's name and price.
pub async fn delete(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PackageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_pricing(price_per_person_cents: i64, duration_days: i32) -> Result<(), AppError> {
    if price_per_person_cents < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "price_per_person_cents must not be negative".into(),
        )));
    }
    if duration_days < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "duration_days must be at least 1".into(),
        )));
    }
    Ok(())
}
