//! Handlers for the `/commissions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_core::types::DbId;
use portal_db::models::commission::{Commission, CreateCommission, UpdateCommission};
use portal_db::repositories::CommissionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::note_foreign_write;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/commissions
///
/// Commissions credited to the caller as agent, newest first.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Commission>>> {
    let commissions = CommissionRepo::list_by_agent(&state.pool, auth_user.user_id).await?;
    Ok(Json(commissions))
}

/// POST /api/commissions
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateCommission>,
) -> AppResult<(StatusCode, Json<Commission>)> {
    let commission = CommissionRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        application_id = commission.application_id,
        commission_id = commission.id,
        amount = commission.amount,
        "Commission recorded",
    );
    Ok((StatusCode::CREATED, Json(commission)))
}

/// PUT /api/commissions/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCommission>,
) -> AppResult<Json<Commission>> {
    let existing = CommissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Commission", id))?;
    note_foreign_write(&auth_user, "Commission", id, &[existing.agent_id]);

    let commission = CommissionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Commission", id))?;
    Ok(Json(commission))
}
