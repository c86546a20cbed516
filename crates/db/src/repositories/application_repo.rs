//! Repository for the `applications` table.
//!
//! List queries are scoped by the caller's role. The detail variants attach
//! related user, university and program records with one batch query per
//! relation rather than a join per row.

use std::collections::HashMap;

use portal_core::types::DbId;
use portal_core::vocabulary::ApplicationStatus;
use sqlx::PgPool;

use crate::models::application::{
    Application, ApplicationWithDetails, CreateApplication, UpdateApplication,
};
use crate::models::user::UserResponse;
use crate::repositories::{ProgramRepo, UniversityProfileRepo, UserRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, agent_id, university_id, program_id, status, \
                        submitted_at, reviewed_at, interview_date, offer_date, \
                        enrollment_date, notes, created_at, updated_at";

/// Whose applications a list query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationScope {
    /// Applications the student created; newest first.
    Student(DbId),
    /// Applications assigned to the agent; most recently updated first.
    Agent(DbId),
    /// Applications addressed to the university profile; newest first.
    University(DbId),
}

impl ApplicationScope {
    fn predicate(self) -> (&'static str, DbId) {
        match self {
            ApplicationScope::Student(id) => {
                ("student_id = $1 ORDER BY created_at DESC, id DESC", id)
            }
            ApplicationScope::Agent(id) => ("agent_id = $1 ORDER BY updated_at DESC, id DESC", id),
            ApplicationScope::University(id) => {
                ("university_id = $1 ORDER BY created_at DESC, id DESC", id)
            }
        }
    }
}

/// Provides CRUD operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert an application for `student_id`. Status defaults to `draft`.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let status = input.status.unwrap_or_default();
        let query = format!(
            "INSERT INTO applications
                (student_id, agent_id, university_id, program_id, status, submitted_at, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(student_id)
            .bind(input.agent_id)
            .bind(input.university_id)
            .bind(input.program_id)
            .bind(status.as_str())
            .bind(input.submitted_at)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an application. Only non-`None` fields in `input` are applied.
    ///
    /// No transition rules are checked: any status may replace any other.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateApplication,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET
                agent_id = COALESCE($2, agent_id),
                status = COALESCE($3, status),
                submitted_at = COALESCE($4, submitted_at),
                reviewed_at = COALESCE($5, reviewed_at),
                interview_date = COALESCE($6, interview_date),
                offer_date = COALESCE($7, offer_date),
                enrollment_date = COALESCE($8, enrollment_date),
                notes = COALESCE($9, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(input.agent_id)
            .bind(input.status.map(ApplicationStatus::as_str))
            .bind(input.submitted_at)
            .bind(input.reviewed_at)
            .bind(input.interview_date)
            .bind(input.offer_date)
            .bind(input.enrollment_date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Plain rows for the given scope.
    pub async fn list(
        pool: &PgPool,
        scope: ApplicationScope,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let (predicate, owner_id) = scope.predicate();
        let query = format!("SELECT {COLUMNS} FROM applications WHERE {predicate}");
        sqlx::query_as::<_, Application>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Rows for the given scope with their related records attached.
    ///
    /// Students see university and program; agents see student, university
    /// and program; universities see student and program. A related record
    /// that no longer exists is left as `None`.
    pub async fn list_with_details(
        pool: &PgPool,
        scope: ApplicationScope,
    ) -> Result<Vec<ApplicationWithDetails>, sqlx::Error> {
        let applications = Self::list(pool, scope).await?;
        if applications.is_empty() {
            return Ok(Vec::new());
        }

        let with_student = !matches!(scope, ApplicationScope::Student(_));
        let with_university = !matches!(scope, ApplicationScope::University(_));

        let program_ids = distinct(applications.iter().map(|a| a.program_id));
        let programs: HashMap<_, _> = ProgramRepo::find_by_ids(pool, &program_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut universities = HashMap::new();
        if with_university {
            let ids = distinct(applications.iter().map(|a| a.university_id));
            universities = UniversityProfileRepo::find_by_ids(pool, &ids)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect();
        }

        let mut students = HashMap::new();
        if with_student {
            let ids = distinct(applications.iter().map(|a| a.student_id));
            students = UserRepo::find_by_ids(pool, &ids)
                .await?
                .into_iter()
                .map(|u| (u.id, UserResponse::from(u)))
                .collect();
        }

        Ok(applications
            .into_iter()
            .map(|application| ApplicationWithDetails {
                student: students.get(&application.student_id).cloned(),
                university: universities.get(&application.university_id).cloned(),
                program: programs.get(&application.program_id).cloned(),
                application,
            })
            .collect())
    }
}

fn distinct(ids: impl Iterator<Item = DbId>) -> Vec<DbId> {
    let mut ids: Vec<DbId> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
