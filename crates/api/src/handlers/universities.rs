//! Handlers for the public university catalogue and program management.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use portal_core::search::SearchFilters;
use portal_core::types::DbId;
use portal_db::models::profile::UniversityProfile;
use portal_db::models::program::{CreateProgram, UniversityProgram};
use portal_db::models::search::UniversitySearchResult;
use portal_db::repositories::{ProgramRepo, SearchRepo, UniversityProfileRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::note_foreign_write;
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::state::AppState;

/// GET /api/universities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UniversityProfile>>> {
    let universities = UniversityProfileRepo::list_active(&state.pool).await?;
    Ok(Json(universities))
}

/// GET /api/universities/search?country=&field=&budgetMin=&budgetMax=
///
/// Every active university matching `country`, each with its programs that
/// match the program filters. Universities whose programs all fail the
/// filters are still listed, with an empty `programs` array.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<UniversitySearchResult>>> {
    let filters = SearchFilters::parse(
        params.country.as_deref(),
        params.field.as_deref(),
        params.budget_min.as_deref(),
        params.budget_max.as_deref(),
    )?;
    let results = SearchRepo::search_universities(&state.pool, &filters).await?;
    Ok(Json(results))
}

/// GET /api/universities/{id}/programs and GET /api/programs/{university_id}
///
/// An unknown university yields an empty list.
pub async fn list_programs(
    State(state): State<AppState>,
    IdPath(university_id): IdPath<DbId>,
) -> AppResult<Json<Vec<UniversityProgram>>> {
    let programs = ProgramRepo::list_active_by_university(&state.pool, university_id).await?;
    Ok(Json(programs))
}

/// POST /api/universities/{id}/programs
pub async fn create_program(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPath(university_id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateProgram>,
) -> AppResult<(StatusCode, Json<UniversityProgram>)> {
    let university = UniversityProfileRepo::find_by_id(&state.pool, university_id)
        .await?
        .ok_or(AppError::not_found("University", university_id))?;
    note_foreign_write(&auth_user, "University", university.id, &[university.user_id]);

    let program = ProgramRepo::create(&state.pool, university.id, &input).await?;
    tracing::info!(
        user_id = auth_user.user_id,
        university_id = university.id,
        program_id = program.id,
        "Program created",
    );
    Ok((StatusCode::CREATED, Json(program)))
}
