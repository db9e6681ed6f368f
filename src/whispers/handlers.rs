/**
 * Whisper Handlers
 *
 * CRUD endpoints under /api/v1/whisper. Every operation requires a
 * verified principal (the `AuthUser` extractor runs before the path or
 * body is looked at), and update/delete additionally require ownership.
 *
 * Request lifecycle for a mutating call:
 * UNAUTHENTICATED -> AUTHENTICATED (token verified) -> AUTHORIZED
 * (ownership checked) -> store operation -> COMPLETED.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::store::WhisperStore;
use crate::whispers::model::Whisper;
use crate::whispers::ownership::authorize_mutation;

/// Body for create and update
#[derive(Debug, Deserialize)]
pub struct WhisperBody {
    #[serde(default)]
    pub message: String,
}

/// Whisper ids are opaque; anything that does not parse as one simply
/// does not exist.
fn parse_whisper_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

/// GET /api/v1/whisper - all whispers, oldest first
pub async fn list_whispers(
    State(whispers): State<Arc<dyn WhisperStore>>,
    AuthUser(_principal): AuthUser,
) -> Result<Json<Vec<Whisper>>, ApiError> {
    let all = whispers.list().await?;
    Ok(Json(all))
}

/// GET /api/v1/whisper/{id}
pub async fn get_whisper(
    State(whispers): State<Arc<dyn WhisperStore>>,
    AuthUser(_principal): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Whisper>, ApiError> {
    let id = parse_whisper_id(&id)?;
    let whisper = whispers.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(whisper))
}

/// POST /api/v1/whisper - create, author = requesting principal
pub async fn create_whisper(
    State(whispers): State<Arc<dyn WhisperStore>>,
    AuthUser(principal): AuthUser,
    Json(body): Json<WhisperBody>,
) -> Result<(StatusCode, Json<Whisper>), ApiError> {
    if body.message.is_empty() {
        return Err(ApiError::validation("Message is required"));
    }

    let whisper = whispers.create(body.message, principal.id).await?;
    tracing::info!("Whisper {} created by {}", whisper.id, principal.id);

    Ok((StatusCode::CREATED, Json(whisper)))
}

/// PUT /api/v1/whisper/{id} - owner only
pub async fn update_whisper(
    State(whispers): State<Arc<dyn WhisperStore>>,
    AuthUser(principal): AuthUser,
    Path(id): Path<String>,
    Json(body): Json<WhisperBody>,
) -> Result<Json<Whisper>, ApiError> {
    if body.message.is_empty() {
        return Err(ApiError::validation("Message is required"));
    }

    let id = parse_whisper_id(&id)?;
    authorize_mutation(whispers.as_ref(), &principal, id).await?;

    let updated = whispers
        .update(id, body.message)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!("Whisper {} updated by {}", updated.id, principal.id);

    Ok(Json(updated))
}

/// DELETE /api/v1/whisper/{id} - owner only
pub async fn delete_whisper(
    State(whispers): State<Arc<dyn WhisperStore>>,
    AuthUser(principal): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_whisper_id(&id)?;
    authorize_mutation(whispers.as_ref(), &principal, id).await?;

    if !whispers.delete(id).await? {
        // Deleted out from under us between check and delete.
        return Err(ApiError::NotFound);
    }
    tracing::info!("Whisper {} deleted by {}", id, principal.id);

    Ok(StatusCode::OK)
}
