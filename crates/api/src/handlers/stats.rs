//! Handler for the role-dependent dashboard statistics.

use axum::extract::State;
use axum::Json;
use portal_core::stats::{current_month_start, RoleStats};
use portal_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/stats
///
/// The response shape depends on the caller's current role. Monthly figures
/// cover the calendar month so far (UTC).
pub async fn get_stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<RoleStats>> {
    let stats = StatsRepo::for_role(
        &state.pool,
        auth_user.user_id,
        auth_user.role,
        current_month_start(),
    )
    .await?;
    tracing::debug!(user_id = auth_user.user_id, role = %auth_user.role, "Computed stats");
    Ok(Json(stats))
}
