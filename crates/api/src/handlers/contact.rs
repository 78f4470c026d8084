//! Handlers for the `/contact` resource.
//!
//! The public endpoint stores a contact message and then fires a best-effort
//! email notification to the back-office address. Delivery failures are
//! logged and never affect the response -- the visitor's submission is
//! already persisted at that point.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use voyara_core::contact::validate_new_message;
use voyara_core::error::CoreError;
use voyara_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use voyara_core::types::DbId;
use voyara_db::models::contact_message::{ContactListParams, CreateContactMessage};
use voyara_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Submit a contact message from the public site.
pub async fn submit_message(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    validate_new_message(&input.name, &input.email, &input.message)?;

    let message = ContactMessageRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    // Best-effort notification. The message row is already durable; a
    // failed send must not fail the request.
    if let (Some(mailer), Some(notify_to)) = (&state.mailer, &state.config.contact_notify_to) {
        let mailer = Arc::clone(mailer);
        let notify_to = notify_to.clone();
        let msg = message.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer
                .send_contact_notification(
                    &notify_to,
                    &msg.name,
                    &msg.email,
                    &msg.subject,
                    &msg.message,
                )
                .await
            {
                tracing::warn!(message_id = msg.id, error = %e, "Contact notification failed");
            }
        });
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

// ---------------------------------------------------------------------------
// GET /admin/messages
// ---------------------------------------------------------------------------

/// List contact messages, newest first. Supports `?unread_only=true`.
pub async fn list_messages(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let messages =
        ContactMessageRepo::list(&state.pool, params.unread_only, limit, offset).await?;
    Ok(Json(DataResponse { data: messages }))
}

// ---------------------------------------------------------------------------
// GET /admin/messages/:id
// ---------------------------------------------------------------------------

/// Get a single message and mark it read.
pub async fn get_message(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;
    Ok(Json(DataResponse { data: message }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/messages/:id
// ---------------------------------------------------------------------------

/// Delete a contact message.
pub async fn delete_message(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactMessageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))
    }
}
