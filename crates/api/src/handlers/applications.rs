//! Handlers for the `/applications` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_core::vocabulary::Role;
use portal_db::models::application::{
    Application, ApplicationWithDetails, CreateApplication, UpdateApplication,
};
use portal_db::models::document::Document;
use portal_db::repositories::{
    ApplicationRepo, ApplicationScope, DocumentRepo, ProgramRepo, UniversityProfileRepo,
};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::note_foreign_write;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/applications
///
/// Students see their own applications, agents the ones assigned to them,
/// universities the ones addressed to their profile. Admins and university
/// users without a profile get an empty list.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<ApplicationWithDetails>>> {
    let scope = match auth_user.role {
        Role::Student => Some(ApplicationScope::Student(auth_user.user_id)),
        Role::Agent => Some(ApplicationScope::Agent(auth_user.user_id)),
        Role::University => UniversityProfileRepo::find_by_user(&state.pool, auth_user.user_id)
            .await?
            .map(|profile| ApplicationScope::University(profile.id)),
        Role::Admin => None,
    };

    let Some(scope) = scope else {
        return Ok(Json(Vec::new()));
    };
    let applications = ApplicationRepo::list_with_details(&state.pool, scope).await?;
    Ok(Json(applications))
}

/// POST /api/applications
///
/// The caller becomes the application's student. The program must belong to
/// the named university.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateApplication>,
) -> AppResult<(StatusCode, Json<Application>)> {
    let program = ProgramRepo::find_by_id(&state.pool, input.program_id).await?;
    match program {
        Some(program) if program.university_id == input.university_id => {}
        Some(program) => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Program {} does not belong to university {}",
                program.id, input.university_id
            ))));
        }
        None => {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Program {} does not exist",
                input.program_id
            ))));
        }
    }

    let application = ApplicationRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        application_id = application.id,
        status = %application.status,
        "Application created",
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Application>> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Application", id))?;
    Ok(Json(application))
}

/// PUT /api/applications/{id}
///
/// Partial update. Any status may be written from any other.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateApplication>,
) -> AppResult<Json<Application>> {
    let existing = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Application", id))?;
    let owners = owner_ids(&state, &existing).await?;
    note_foreign_write(&auth_user, "Application", id, &owners);

    let application = ApplicationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Application", id))?;

    if existing.status != application.status {
        tracing::info!(
            user_id = auth_user.user_id,
            application_id = id,
            from = %existing.status,
            to = %application.status,
            "Application status changed",
        );
    }
    Ok(Json(application))
}

/// GET /api/applications/{id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = DocumentRepo::list_by_application(&state.pool, id).await?;
    Ok(Json(documents))
}

/// Users with a stake in an application: its student, its agent, and the
/// account behind its university profile.
async fn owner_ids(state: &AppState, application: &Application) -> AppResult<Vec<DbId>> {
    let mut owners = vec![application.student_id];
    owners.extend(application.agent_id);
    if let Some(university) =
        UniversityProfileRepo::find_by_id(&state.pool, application.university_id).await?
    {
        owners.push(university.user_id);
    }
    Ok(owners)
}
