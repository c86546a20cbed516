//! Application entity model and DTOs.

use portal_core::types::{DbId, Timestamp};
use portal_core::vocabulary::ApplicationStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::profile::UniversityProfile;
use crate::models::program::UniversityProgram;
use crate::models::user::UserResponse;

/// A row from `applications`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: DbId,
    pub student_id: DbId,
    pub agent_id: Option<DbId>,
    pub university_id: DbId,
    pub program_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub submitted_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
    pub interview_date: Option<Timestamp>,
    pub offer_date: Option<Timestamp>,
    pub enrollment_date: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an application. The student is the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    pub agent_id: Option<DbId>,
    pub university_id: DbId,
    pub program_id: DbId,
    /// Defaults to `draft` if omitted.
    pub status: Option<ApplicationStatus>,
    pub submitted_at: Option<Timestamp>,
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

/// DTO for updating an application. All fields are optional.
///
/// Any status may be written regardless of the current one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplication {
    pub agent_id: Option<DbId>,
    pub status: Option<ApplicationStatus>,
    pub submitted_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
    pub interview_date: Option<Timestamp>,
    pub offer_date: Option<Timestamp>,
    pub enrollment_date: Option<Timestamp>,
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

/// An application joined with the records the caller's dashboard shows.
///
/// Which relations are present depends on who is looking: students see
/// university and program, agents additionally see the student, universities
/// see student and program.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithDetails {
    #[serde(flatten)]
    pub application: Application,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<UniversityProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<UniversityProgram>,
}
