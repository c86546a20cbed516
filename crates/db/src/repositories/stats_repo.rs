//! Aggregate queries behind the per-role dashboards.
//!
//! Counting happens here in SQL; rates and shaping happen in
//! `portal_core::stats`.

use portal_core::stats::{
    AdminStats, AgentCounts, AgentStats, EmptyStats, RoleStats, StudentCounts, StudentStats,
    UniversityCounts, UniversityStats,
};
use portal_core::types::{DbId, Timestamp};
use portal_core::vocabulary::{ApplicationStatus, Role};
use sqlx::{FromRow, PgPool};

use crate::repositories::UniversityProfileRepo;

#[derive(Debug, FromRow)]
struct StudentRow {
    total: i64,
    offers: i64,
    under_review: i64,
}

#[derive(Debug, FromRow)]
struct AgentRow {
    total: i64,
    active: i64,
    successful: i64,
}

#[derive(Debug, FromRow)]
struct UniversityRow {
    total: i64,
    submitted: i64,
    offers: i64,
    enrolled: i64,
}

#[derive(Debug, FromRow)]
struct AdminRow {
    total_users: i64,
    universities: i64,
    active_applications: i64,
}

/// Provides the statistics queries.
pub struct StatsRepo;

impl StatsRepo {
    /// Statistics for `user_id` acting as `role`.
    ///
    /// `since` bounds the monthly commission sums, normally the start of the
    /// current month. A university-role user without a profile gets
    /// [`RoleStats::Empty`].
    pub async fn for_role(
        pool: &PgPool,
        user_id: DbId,
        role: Role,
        since: Timestamp,
    ) -> Result<RoleStats, sqlx::Error> {
        let stats = match role {
            Role::Student => RoleStats::Student(Self::student(pool, user_id).await?),
            Role::Agent => RoleStats::Agent(Self::agent(pool, user_id, since).await?),
            Role::University => match UniversityProfileRepo::find_by_user(pool, user_id).await? {
                Some(profile) => RoleStats::University(Self::university(pool, profile.id).await?),
                None => RoleStats::Empty(EmptyStats::default()),
            },
            Role::Admin => RoleStats::Admin(Self::admin(pool, since).await?),
        };
        Ok(stats)
    }

    pub async fn student(pool: &PgPool, student_id: DbId) -> Result<StudentStats, sqlx::Error> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'offer_received') AS offers,
                COUNT(*) FILTER (WHERE status = 'under_review') AS under_review
             FROM applications
             WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_one(pool)
        .await?;

        let latest: Option<String> = sqlx::query_scalar(
            "SELECT status FROM applications
             WHERE student_id = $1 AND status = ANY($2)
             ORDER BY updated_at DESC, id DESC
             LIMIT 1",
        )
        .bind(student_id)
        .bind(ApplicationStatus::names(ApplicationStatus::VISA_RELEVANT))
        .fetch_optional(pool)
        .await?;

        Ok(StudentStats::compute(StudentCounts {
            total: row.total,
            offers: row.offers,
            under_review: row.under_review,
            latest_visa_status: latest.as_deref().and_then(ApplicationStatus::parse),
        }))
    }

    pub async fn agent(
        pool: &PgPool,
        agent_id: DbId,
        since: Timestamp,
    ) -> Result<AgentStats, sqlx::Error> {
        let row = sqlx::query_as::<_, AgentRow>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE NOT (status = ANY($2))) AS active,
                COUNT(*) FILTER (WHERE status = ANY($3)) AS successful
             FROM applications
             WHERE agent_id = $1",
        )
        .bind(agent_id)
        .bind(ApplicationStatus::names(ApplicationStatus::TERMINAL))
        .bind(ApplicationStatus::names(ApplicationStatus::SUCCESSFUL))
        .fetch_one(pool)
        .await?;

        let monthly_commission: f64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount), 0)::float8 FROM commissions
             WHERE agent_id = $1 AND created_at >= $2",
        )
        .bind(agent_id)
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(AgentStats::compute(AgentCounts {
            total: row.total,
            active: row.active,
            successful: row.successful,
            monthly_commission,
        }))
    }

    /// Statistics for one university profile (not the owning user id).
    pub async fn university(
        pool: &PgPool,
        university_id: DbId,
    ) -> Result<UniversityStats, sqlx::Error> {
        let row = sqlx::query_as::<_, UniversityRow>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'submitted') AS submitted,
                COUNT(*) FILTER (WHERE status = 'offer_received') AS offers,
                COUNT(*) FILTER (WHERE status = 'enrolled') AS enrolled
             FROM applications
             WHERE university_id = $1",
        )
        .bind(university_id)
        .fetch_one(pool)
        .await?;

        Ok(UniversityStats::compute(UniversityCounts {
            total: row.total,
            submitted: row.submitted,
            offers: row.offers,
            enrolled: row.enrolled,
        }))
    }

    pub async fn admin(pool: &PgPool, since: Timestamp) -> Result<AdminStats, sqlx::Error> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM university_profiles WHERE is_active = true) AS universities,
                (SELECT COUNT(*) FROM applications WHERE NOT (status = ANY($1)))
                    AS active_applications",
        )
        .bind(ApplicationStatus::names(ApplicationStatus::TERMINAL))
        .fetch_one(pool)
        .await?;

        let monthly_revenue: f64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount), 0)::float8 FROM commissions WHERE created_at >= $1",
        )
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(AdminStats {
            total_users: row.total_users,
            universities: row.universities,
            active_applications: row.active_applications,
            monthly_revenue,
        })
    }
}
