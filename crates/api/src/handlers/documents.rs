//! Handlers for the `/documents` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_core::types::DbId;
use portal_db::models::document::{CreateDocument, Document, UpdateDocument};
use portal_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::note_foreign_write;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/documents
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Document>>> {
    let documents = DocumentRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(documents))
}

/// POST /api/documents
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateDocument>,
) -> AppResult<(StatusCode, Json<Document>)> {
    let document = DocumentRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        document_id = document.id,
        application_id = ?document.application_id,
        document_type = %document.document_type,
        "Document registered",
    );
    Ok((StatusCode::CREATED, Json(document)))
}

/// PUT /api/documents/{id}
///
/// Setting `isVerified` records the caller as the verifier.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDocument>,
) -> AppResult<Json<Document>> {
    let existing = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Document", id))?;
    note_foreign_write(&auth_user, "Document", id, &[existing.user_id]);

    let document = DocumentRepo::update(&state.pool, id, auth_user.user_id, &input)
        .await?
        .ok_or(AppError::not_found("Document", id))?;
    if let Some(verified) = input.is_verified {
        tracing::info!(
            user_id = auth_user.user_id,
            document_id = id,
            verified,
            "Document verification set",
        );
    }
    Ok(Json(document))
}
