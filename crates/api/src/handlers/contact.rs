//! Handlers for the `/contact` inbox.
//!
//! Submitting a message is public; reading and managing the inbox requires
//! an admin token.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use techvolt_core::project::ENTITY_CONTACT_MESSAGE;
use techvolt_db::models::contact_message::{
    ContactMessage, CreateContactMessage, UnreadCount, UpdateContactMessage,
};
use techvolt_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<ContactMessage>)> {
    let message = ContactMessageRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/contact
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ContactMessage>>> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// GET /api/contact/unread-count
pub async fn unread_count(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<UnreadCount>> {
    let count = ContactMessageRepo::count_unread(&state.pool).await?;
    Ok(Json(UnreadCount { count }))
}

/// GET /api/contact/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY_CONTACT_MESSAGE, id))?;
    Ok(Json(message))
}

/// PATCH /api/contact/{id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateContactMessage>,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY_CONTACT_MESSAGE, id))?;

    tracing::info!(message_id = id, token_id = %admin.token_id, "Contact message updated");

    Ok(Json(message))
}

/// PATCH /api/contact/{id}/read
///
/// Idempotent: marking an already-read message succeeds unchanged.
pub async fn mark_as_read(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ContactMessage>> {
    let message = ContactMessageRepo::mark_as_read(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY_CONTACT_MESSAGE, id))?;
    Ok(Json(message))
}

/// DELETE /api/contact/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if !ContactMessageRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY_CONTACT_MESSAGE, id));
    }

    tracing::info!(message_id = id, token_id = %admin.token_id, "Contact message deleted");

    Ok(StatusCode::NO_CONTENT)
}
