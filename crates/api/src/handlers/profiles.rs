//! Handlers for the `/profiles` resource.
//!
//! Each role has one profile per user. POST creates it (409 on a second
//! create); PUT applies a partial update, creating the profile first if the
//! caller has none yet.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_db::models::profile::{
    AgentProfile, AgentProfileInput, CreateUniversityProfile, StudentProfile,
    StudentProfileInput, UniversityProfile, UpdateUniversityProfile,
};
use portal_db::repositories::{AgentProfileRepo, StudentProfileRepo, UniversityProfileRepo};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/profiles/student
pub async fn create_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<StudentProfileInput>,
) -> AppResult<(StatusCode, Json<StudentProfile>)> {
    let profile = StudentProfileRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(user_id = auth_user.user_id, profile_id = profile.id, "Student profile created");
    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /api/profiles/student
pub async fn update_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<StudentProfileInput>,
) -> AppResult<Json<StudentProfile>> {
    let profile = match StudentProfileRepo::update_by_user(&state.pool, auth_user.user_id, &input)
        .await?
    {
        Some(profile) => profile,
        None => StudentProfileRepo::create(&state.pool, auth_user.user_id, &input).await?,
    };
    Ok(Json(profile))
}

/// POST /api/profiles/agent
pub async fn create_agent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<AgentProfileInput>,
) -> AppResult<(StatusCode, Json<AgentProfile>)> {
    let profile = AgentProfileRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(user_id = auth_user.user_id, profile_id = profile.id, "Agent profile created");
    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /api/profiles/agent
pub async fn update_agent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<AgentProfileInput>,
) -> AppResult<Json<AgentProfile>> {
    let profile = match AgentProfileRepo::update_by_user(&state.pool, auth_user.user_id, &input)
        .await?
    {
        Some(profile) => profile,
        None => AgentProfileRepo::create(&state.pool, auth_user.user_id, &input).await?,
    };
    Ok(Json(profile))
}

/// POST /api/profiles/university
pub async fn create_university(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateUniversityProfile>,
) -> AppResult<(StatusCode, Json<UniversityProfile>)> {
    let profile = UniversityProfileRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        university_id = profile.id,
        "University profile created",
    );
    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /api/profiles/university
///
/// A first write must carry `universityName` and `country`.
pub async fn update_university(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<UpdateUniversityProfile>,
) -> AppResult<Json<UniversityProfile>> {
    if let Some(profile) =
        UniversityProfileRepo::update_by_user(&state.pool, auth_user.user_id, &input).await?
    {
        return Ok(Json(profile));
    }

    let create = input.into_create()?;
    let profile = UniversityProfileRepo::create(&state.pool, auth_user.user_id, &create).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        university_id = profile.id,
        "University profile created on first update",
    );
    Ok(Json(profile))
}
