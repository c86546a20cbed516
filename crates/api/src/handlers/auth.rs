//! Handlers for the `/auth` resource and role switching.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use portal_core::error::CoreError;
use portal_core::validation::{not_blank, MIN_PASSWORD_LENGTH};
use portal_core::vocabulary::Role;
use portal_db::models::profile::{AgentProfile, StudentProfile, UniversityProfile};
use portal_db::models::session::CreateSession;
use portal_db::models::user::{CreateUser, User, UserResponse};
use portal_db::repositories::{
    AgentProfileRepo, SessionRepo, StudentProfileRepo, UniversityProfileRepo, UserRepo,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub last_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(custom(function = "not_blank"))]
    pub refresh_token: String,
}

/// Request body for `POST /auth/user/role` and `POST /switch-role`.
#[derive(Debug, Deserialize, Validate)]
pub struct RoleRequest {
    pub role: Role,
}

/// Successful authentication response returned by register, login and refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// The caller's role-specific profile, if one exists.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RoleProfile {
    Student(StudentProfile),
    Agent(AgentProfile),
    University(UniversityProfile),
}

/// `GET /auth/user` body: the user fields plus `profile` (or `null`).
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub profile: Option<RoleProfile>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account (role `student`) and sign it in.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email.trim().to_string(),
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash,
            role: Role::default(),
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User registered");

    let response = create_auth_response(&state, user, user_agent(&headers)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
///
/// Authenticate with email + password.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(invalid());
    }

    let response = create_auth_response(&state, user, user_agent(&headers)).await?;
    Ok(Json(response))
}

/// POST /api/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // A concurrent refresh with the same token loses the race here.
    if !SessionRepo::revoke(&state.pool, session.id).await? {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Refresh token already used".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = create_auth_response(&state, user, user_agent(&headers)).await?;
    Ok(Json(response))
}

/// POST /api/auth/logout
///
/// Revoke all sessions for the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        session_id = auth_user.session_id,
        revoked,
        "User logged out",
    );
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user
///
/// The caller plus the profile matching their current role.
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User", auth_user.user_id))?;

    let profile = match user.role {
        Role::Student => StudentProfileRepo::find_by_user(&state.pool, user.id)
            .await?
            .map(RoleProfile::Student),
        Role::Agent => AgentProfileRepo::find_by_user(&state.pool, user.id)
            .await?
            .map(RoleProfile::Agent),
        Role::University => UniversityProfileRepo::find_by_user(&state.pool, user.id)
            .await?
            .map(RoleProfile::University),
        Role::Admin => None,
    };

    Ok(Json(CurrentUserResponse {
        user: user.into(),
        profile,
    }))
}

/// POST /api/auth/user/role and POST /api/switch-role
///
/// Change the caller's role. Switching to the current role is a no-op.
pub async fn update_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<RoleRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::update_role(&state.pool, auth_user.user_id, input.role)
        .await?
        .ok_or_else(|| AppError::not_found("User", auth_user.user_id))?;

    if auth_user.role != input.role {
        tracing::info!(
            user_id = user.id,
            from = %auth_user.role,
            to = %input.role,
            "User switched role",
        );
    }
    Ok(Json(user.into()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Persist a session row, issue tokens bound to it, and build the response.
async fn create_auth_response(
    state: &AppState,
    user: User,
    user_agent: Option<String>,
) -> AppResult<AuthResponse> {
    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
            user_agent,
        },
    )
    .await?;

    let access_token = generate_access_token(user.id, session.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: user.into(),
    })
}
