//! JWT + session authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_core::vocabulary::Role;
use portal_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated caller.
///
/// Resolved from the `Authorization: Bearer <token>` header. The token must
/// be valid, its session must be neither revoked nor expired, and the user
/// must still exist. `role` is the role stored on the user row at request
/// time, so a role switch takes effect without a new token.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub session_id: DbId,
    pub role: Role,
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let session = SessionRepo::find_active(&state.pool, claims.sid)
            .await?
            .filter(|s| s.user_id == claims.sub)
            .ok_or_else(|| unauthorized("Session has ended"))?;

        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| unauthorized("User no longer exists"))?;

        Ok(AuthUser {
            user_id: user.id,
            session_id: session.id,
            role: user.role,
        })
    }
}
