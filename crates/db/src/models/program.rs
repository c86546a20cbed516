//! University program model and DTOs.

use portal_core::types::{DbId, Timestamp};
use portal_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `university_programs`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityProgram {
    pub id: DbId,
    pub university_id: DbId,
    pub program_name: String,
    /// Bachelor, Master, PhD, ...
    pub degree: String,
    pub field: String,
    /// Length in months.
    pub duration: Option<i32>,
    pub tuition_fee: Option<i32>,
    pub currency: String,
    pub requirements: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub scholarship_available: bool,
    pub scholarship_amount: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a program. The owning university comes from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgram {
    #[validate(custom(function = "not_blank"))]
    pub program_name: String,
    #[validate(custom(function = "not_blank"))]
    pub degree: String,
    #[validate(custom(function = "not_blank"))]
    pub field: String,
    #[validate(range(min = 1))]
    pub duration: Option<i32>,
    #[validate(range(min = 0))]
    pub tuition_fee: Option<i32>,
    /// ISO 4217 code. Defaults to `USD`.
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    pub requirements: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub scholarship_available: Option<bool>,
    #[validate(range(min = 0))]
    pub scholarship_amount: Option<i32>,
}
