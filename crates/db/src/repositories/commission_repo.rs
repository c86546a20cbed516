//! Repository for the `commissions` table.
//!
//! `amount` is NUMERIC(10,2) in storage and `f64` in Rust; reads cast with
//! `::float8`, writes with `::numeric`.

use portal_core::types::DbId;
use portal_core::vocabulary::CommissionStatus;
use sqlx::PgPool;

use crate::models::commission::{Commission, CreateCommission, UpdateCommission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, agent_id, application_id, amount::float8 AS amount, currency, \
                        status, paid_at, created_at, updated_at";

/// Provides CRUD operations for commissions.
pub struct CommissionRepo;

impl CommissionRepo {
    /// Insert a commission credited to `agent_id`.
    ///
    /// A commission created directly as `paid` is stamped with `paid_at`.
    pub async fn create(
        pool: &PgPool,
        agent_id: DbId,
        input: &CreateCommission,
    ) -> Result<Commission, sqlx::Error> {
        let status = input.status.unwrap_or_default();
        let query = format!(
            "INSERT INTO commissions (agent_id, application_id, amount, currency, status, paid_at)
             VALUES ($1, $2, $3::numeric, COALESCE($4, 'USD'), $5,
                     CASE WHEN $5 = 'paid' THEN NOW() END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Commission>(&query)
            .bind(agent_id)
            .bind(input.application_id)
            .bind(input.amount)
            .bind(&input.currency)
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Commission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM commissions WHERE id = $1");
        sqlx::query_as::<_, Commission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// An agent's commissions, newest first.
    pub async fn list_by_agent(
        pool: &PgPool,
        agent_id: DbId,
    ) -> Result<Vec<Commission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM commissions
             WHERE agent_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Commission>(&query)
            .bind(agent_id)
            .fetch_all(pool)
            .await
    }

    /// Update a commission. Only non-`None` fields in `input` are applied.
    ///
    /// Moving to `paid` stamps `paid_at` (kept if already paid); moving to
    /// any other status clears it. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommission,
    ) -> Result<Option<Commission>, sqlx::Error> {
        let query = format!(
            "UPDATE commissions SET
                amount = COALESCE($2::numeric, amount),
                currency = COALESCE($3, currency),
                status = COALESCE($4, status),
                paid_at = CASE
                    WHEN $4 IS NULL THEN paid_at
                    WHEN $4 = 'paid' THEN COALESCE(paid_at, NOW())
                    ELSE NULL
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Commission>(&query)
            .bind(id)
            .bind(input.amount)
            .bind(&input.currency)
            .bind(input.status.map(CommissionStatus::as_str))
            .fetch_optional(pool)
            .await
    }
}
