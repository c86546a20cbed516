//! Repository for the `tasks` table.

use portal_core::types::DbId;
use portal_core::vocabulary::TaskPriority;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, application_id, title, description, due_date, \
                        is_completed, completed_at, priority, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a task owned by `user_id`. Priority defaults to `medium`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (user_id, application_id, title, description, due_date, priority)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .bind(input.application_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.priority.unwrap_or_default().as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's tasks by due date, latest first; undated tasks last.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE user_id = $1
             ORDER BY due_date DESC NULLS LAST, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Marking a task complete stamps `completed_at` unless it was already
    /// complete; reopening clears it. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                application_id = COALESCE($2, application_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                due_date = COALESCE($5, due_date),
                priority = COALESCE($6, priority),
                is_completed = COALESCE($7, is_completed),
                completed_at = CASE
                    WHEN $7 IS NULL THEN completed_at
                    WHEN $7 THEN COALESCE(completed_at, NOW())
                    ELSE NULL
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.application_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.priority.map(TaskPriority::as_str))
            .bind(input.is_completed)
            .fetch_optional(pool)
            .await
    }
}
