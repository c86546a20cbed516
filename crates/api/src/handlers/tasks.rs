//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portal_core::types::DbId;
use portal_db::models::task::{CreateTask, Task, UpdateTask};
use portal_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::note_foreign_write;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/tasks
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, auth_user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    IdPath(id): IdPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Task>> {
    let existing = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    note_foreign_write(&auth_user, "Task", id, &[existing.user_id]);

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}
