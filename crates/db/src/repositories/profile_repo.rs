//! Repositories for the three role profile tables.
//!
//! Each profile row is a one-to-one extension of `users`, keyed by the
//! `uq_*_user_id` constraint. A second create for the same user fails with a
//! unique violation. NUMERIC columns are read back as `float8`.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{
    AgentProfile, AgentProfileInput, CreateUniversityProfile, StudentProfile,
    StudentProfileInput, UniversityProfile, UpdateUniversityProfile,
};

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

const STUDENT_COLUMNS: &str = "id, user_id, date_of_birth, nationality, phone_number, address, \
                                gpa::float8 AS gpa, ielts_score::float8 AS ielts_score, \
                                toefl_score, preferred_countries, preferred_fields, \
                                budget_min, budget_max, created_at, updated_at";

/// Provides CRUD operations for student profiles.
pub struct StudentProfileRepo;

impl StudentProfileRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<StudentProfile>, sqlx::Error> {
        let query = format!("SELECT {STUDENT_COLUMNS} FROM student_profiles WHERE user_id = $1");
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a profile for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &StudentProfileInput,
    ) -> Result<StudentProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_profiles
                (user_id, date_of_birth, nationality, phone_number, address, gpa, ielts_score,
                 toefl_score, preferred_countries, preferred_fields, budget_min, budget_max)
             VALUES ($1, $2, $3, $4, $5, $6::numeric, $7::numeric, $8, $9, $10, $11, $12)
             RETURNING {STUDENT_COLUMNS}"
        );
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(user_id)
            .bind(input.date_of_birth)
            .bind(&input.nationality)
            .bind(&input.phone_number)
            .bind(&input.address)
            .bind(input.gpa)
            .bind(input.ielts_score)
            .bind(input.toefl_score)
            .bind(&input.preferred_countries)
            .bind(&input.preferred_fields)
            .bind(input.budget_min)
            .bind(input.budget_max)
            .fetch_one(pool)
            .await
    }

    /// Apply the non-`None` fields of `input` to the user's profile.
    ///
    /// Returns `None` if the user has no student profile.
    pub async fn update_by_user(
        pool: &PgPool,
        user_id: DbId,
        input: &StudentProfileInput,
    ) -> Result<Option<StudentProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE student_profiles SET
                date_of_birth = COALESCE($2, date_of_birth),
                nationality = COALESCE($3, nationality),
                phone_number = COALESCE($4, phone_number),
                address = COALESCE($5, address),
                gpa = COALESCE($6::numeric, gpa),
                ielts_score = COALESCE($7::numeric, ielts_score),
                toefl_score = COALESCE($8, toefl_score),
                preferred_countries = COALESCE($9, preferred_countries),
                preferred_fields = COALESCE($10, preferred_fields),
                budget_min = COALESCE($11, budget_min),
                budget_max = COALESCE($12, budget_max)
             WHERE user_id = $1
             RETURNING {STUDENT_COLUMNS}"
        );
        sqlx::query_as::<_, StudentProfile>(&query)
            .bind(user_id)
            .bind(input.date_of_birth)
            .bind(&input.nationality)
            .bind(&input.phone_number)
            .bind(&input.address)
            .bind(input.gpa)
            .bind(input.ielts_score)
            .bind(input.toefl_score)
            .bind(&input.preferred_countries)
            .bind(&input.preferred_fields)
            .bind(input.budget_min)
            .bind(input.budget_max)
            .fetch_optional(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

const AGENT_COLUMNS: &str = "id, user_id, company_name, license_number, phone_number, address, \
                              specializations, commission_rate::float8 AS commission_rate, \
                              is_active, created_at, updated_at";

/// Provides CRUD operations for agent profiles.
pub struct AgentProfileRepo;

impl AgentProfileRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<AgentProfile>, sqlx::Error> {
        let query = format!("SELECT {AGENT_COLUMNS} FROM agent_profiles WHERE user_id = $1");
        sqlx::query_as::<_, AgentProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a profile for `user_id`. `is_active` defaults to true.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &AgentProfileInput,
    ) -> Result<AgentProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO agent_profiles
                (user_id, company_name, license_number, phone_number, address,
                 specializations, commission_rate, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7::numeric, COALESCE($8, true))
             RETURNING {AGENT_COLUMNS}"
        );
        sqlx::query_as::<_, AgentProfile>(&query)
            .bind(user_id)
            .bind(&input.company_name)
            .bind(&input.license_number)
            .bind(&input.phone_number)
            .bind(&input.address)
            .bind(&input.specializations)
            .bind(input.commission_rate)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if the user has no agent profile.
    pub async fn update_by_user(
        pool: &PgPool,
        user_id: DbId,
        input: &AgentProfileInput,
    ) -> Result<Option<AgentProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE agent_profiles SET
                company_name = COALESCE($2, company_name),
                license_number = COALESCE($3, license_number),
                phone_number = COALESCE($4, phone_number),
                address = COALESCE($5, address),
                specializations = COALESCE($6, specializations),
                commission_rate = COALESCE($7::numeric, commission_rate),
                is_active = COALESCE($8, is_active)
             WHERE user_id = $1
             RETURNING {AGENT_COLUMNS}"
        );
        sqlx::query_as::<_, AgentProfile>(&query)
            .bind(user_id)
            .bind(&input.company_name)
            .bind(&input.license_number)
            .bind(&input.phone_number)
            .bind(&input.address)
            .bind(&input.specializations)
            .bind(input.commission_rate)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// University
// ---------------------------------------------------------------------------

pub(crate) const UNIVERSITY_COLUMNS: &str = "id, user_id, university_name, country, city, address, \
                                              website, ranking, description, logo_url, \
                                              is_active, created_at, updated_at";

/// Provides CRUD operations for university profiles.
pub struct UniversityProfileRepo;

impl UniversityProfileRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UniversityProfile>, sqlx::Error> {
        let query =
            format!("SELECT {UNIVERSITY_COLUMNS} FROM university_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UniversityProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UniversityProfile>, sqlx::Error> {
        let query = format!("SELECT {UNIVERSITY_COLUMNS} FROM university_profiles WHERE id = $1");
        sqlx::query_as::<_, UniversityProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch lookup. Missing ids are silently skipped.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<UniversityProfile>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query =
            format!("SELECT {UNIVERSITY_COLUMNS} FROM university_profiles WHERE id = ANY($1)");
        sqlx::query_as::<_, UniversityProfile>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// All active universities ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<UniversityProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {UNIVERSITY_COLUMNS} FROM university_profiles
             WHERE is_active = true
             ORDER BY university_name, id"
        );
        sqlx::query_as::<_, UniversityProfile>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateUniversityProfile,
    ) -> Result<UniversityProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO university_profiles
                (user_id, university_name, country, city, address, website, ranking,
                 description, logo_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {UNIVERSITY_COLUMNS}"
        );
        sqlx::query_as::<_, UniversityProfile>(&query)
            .bind(user_id)
            .bind(&input.university_name)
            .bind(&input.country)
            .bind(&input.city)
            .bind(&input.address)
            .bind(&input.website)
            .bind(input.ranking)
            .bind(&input.description)
            .bind(&input.logo_url)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if the user has no university profile.
    pub async fn update_by_user(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateUniversityProfile,
    ) -> Result<Option<UniversityProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE university_profiles SET
                university_name = COALESCE($2, university_name),
                country = COALESCE($3, country),
                city = COALESCE($4, city),
                address = COALESCE($5, address),
                website = COALESCE($6, website),
                ranking = COALESCE($7, ranking),
                description = COALESCE($8, description),
                logo_url = COALESCE($9, logo_url),
                is_active = COALESCE($10, is_active)
             WHERE user_id = $1
             RETURNING {UNIVERSITY_COLUMNS}"
        );
        sqlx::query_as::<_, UniversityProfile>(&query)
            .bind(user_id)
            .bind(&input.university_name)
            .bind(&input.country)
            .bind(&input.city)
            .bind(&input.address)
            .bind(&input.website)
            .bind(input.ranking)
            .bind(&input.description)
            .bind(&input.logo_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
