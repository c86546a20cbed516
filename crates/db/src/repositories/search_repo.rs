//! University search with optional country, field and budget filters.

use std::collections::HashMap;

use portal_core::search::SearchFilters;
use sqlx::PgPool;

use crate::models::profile::UniversityProfile;
use crate::models::program::UniversityProgram;
use crate::models::search::UniversitySearchResult;
use crate::repositories::profile_repo::UNIVERSITY_COLUMNS;
use crate::repositories::program_repo;

/// Provides the university search query.
pub struct SearchRepo;

impl SearchRepo {
    /// Active universities matching `filters.country`, ordered by name, each
    /// with its active programs matching the field and budget filters.
    ///
    /// Programs without a tuition fee never satisfy a budget bound.
    pub async fn search_universities(
        pool: &PgPool,
        filters: &SearchFilters,
    ) -> Result<Vec<UniversitySearchResult>, sqlx::Error> {
        let query = format!(
            "SELECT {UNIVERSITY_COLUMNS} FROM university_profiles
             WHERE is_active = true
               AND ($1::text IS NULL OR country = $1)
             ORDER BY university_name, id"
        );
        let universities = sqlx::query_as::<_, UniversityProfile>(&query)
            .bind(&filters.country)
            .fetch_all(pool)
            .await?;

        if universities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<_> = universities.iter().map(|u| u.id).collect();
        let query = format!(
            "SELECT {} FROM university_programs
             WHERE university_id = ANY($1)
               AND is_active = true
               AND ($2::text IS NULL OR field = $2)
               AND ($3::int4 IS NULL OR tuition_fee >= $3)
               AND ($4::int4 IS NULL OR tuition_fee <= $4)
             ORDER BY program_name, id",
            program_repo::COLUMNS
        );
        let programs = sqlx::query_as::<_, UniversityProgram>(&query)
            .bind(&ids)
            .bind(&filters.field)
            .bind(filters.budget_min)
            .bind(filters.budget_max)
            .fetch_all(pool)
            .await?;

        tracing::debug!(
            universities = universities.len(),
            programs = programs.len(),
            program_filters = filters.filters_programs(),
            "University search matched",
        );

        let mut by_university: HashMap<_, Vec<UniversityProgram>> = HashMap::new();
        for program in programs {
            by_university
                .entry(program.university_id)
                .or_default()
                .push(program);
        }

        Ok(universities
            .into_iter()
            .map(|university| UniversitySearchResult {
                programs: by_university.remove(&university.id).unwrap_or_default(),
                university,
            })
            .collect())
    }
}
