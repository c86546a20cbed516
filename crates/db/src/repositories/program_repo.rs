//! Repository for the `university_programs` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::program::{CreateProgram, UniversityProgram};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, university_id, program_name, degree, field, duration, \
                                   tuition_fee, currency, requirements, application_deadline, \
                                   start_date, scholarship_available, scholarship_amount, \
                                   is_active, created_at, updated_at";

/// Provides CRUD operations for university programs.
pub struct ProgramRepo;

impl ProgramRepo {
    /// Active programs of one university, ordered by name.
    pub async fn list_active_by_university(
        pool: &PgPool,
        university_id: DbId,
    ) -> Result<Vec<UniversityProgram>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM university_programs
             WHERE university_id = $1 AND is_active = true
             ORDER BY program_name, id"
        );
        sqlx::query_as::<_, UniversityProgram>(&query)
            .bind(university_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UniversityProgram>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM university_programs WHERE id = $1");
        sqlx::query_as::<_, UniversityProgram>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch lookup. Missing ids are silently skipped.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<UniversityProgram>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM university_programs WHERE id = ANY($1)");
        sqlx::query_as::<_, UniversityProgram>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Insert a program under `university_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        university_id: DbId,
        input: &CreateProgram,
    ) -> Result<UniversityProgram, sqlx::Error> {
        let query = format!(
            "INSERT INTO university_programs
                (university_id, program_name, degree, field, duration, tuition_fee, currency,
                 requirements, application_deadline, start_date, scholarship_available,
                 scholarship_amount)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'USD'), $8, $9, $10,
                     COALESCE($11, false), $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UniversityProgram>(&query)
            .bind(university_id)
            .bind(&input.program_name)
            .bind(&input.degree)
            .bind(&input.field)
            .bind(input.duration)
            .bind(input.tuition_fee)
            .bind(&input.currency)
            .bind(&input.requirements)
            .bind(input.application_deadline)
            .bind(input.start_date)
            .bind(input.scholarship_available)
            .bind(input.scholarship_amount)
            .fetch_one(pool)
            .await
    }
}
