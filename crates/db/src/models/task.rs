//! Task entity model and DTOs.

use portal_core::types::{DbId, Timestamp};
use portal_core::validation::not_blank;
use portal_core::vocabulary::TaskPriority;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `tasks`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    pub application_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    pub is_completed: bool,
    pub completed_at: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub priority: TaskPriority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task. The owner is the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub application_id: Option<DbId>,
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<TaskPriority>,
}

/// DTO for updating a task. All fields are optional.
///
/// Completing a task stamps `completed_at`; reopening it clears the stamp.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub application_id: Option<DbId>,
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    pub is_completed: Option<bool>,
    pub priority: Option<TaskPriority>,
}
