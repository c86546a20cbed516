//! Commission entity model and DTOs.

use portal_core::types::{DbId, Timestamp};
use portal_core::vocabulary::CommissionStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `commissions`. `amount` is NUMERIC(10,2) in storage.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: DbId,
    pub agent_id: DbId,
    pub application_id: DbId,
    pub amount: f64,
    pub currency: String,
    #[sqlx(try_from = "String")]
    pub status: CommissionStatus,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a commission. The agent is the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommission {
    pub application_id: DbId,
    #[validate(range(min = 0.0, max = 99_999_999.99))]
    pub amount: f64,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    pub status: Option<CommissionStatus>,
}

/// DTO for updating a commission. All fields are optional.
///
/// Moving to `paid` stamps `paid_at`; moving to any other status clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommission {
    #[validate(range(min = 0.0, max = 99_999_999.99))]
    pub amount: Option<f64>,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    pub status: Option<CommissionStatus>,
}
