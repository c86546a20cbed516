//! Document entity model and DTOs.

use portal_core::types::{DbId, Timestamp};
use portal_core::validation::not_blank;
use portal_core::vocabulary::DocumentType;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from `documents`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DbId,
    pub user_id: DbId,
    pub application_id: Option<DbId>,
    #[sqlx(try_from = "String")]
    pub document_type: DocumentType,
    pub file_name: String,
    pub file_url: String,
    pub file_size: Option<i32>,
    pub mime_type: Option<String>,
    pub is_verified: bool,
    pub verified_by: Option<DbId>,
    pub verified_at: Option<Timestamp>,
    pub expiry_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an uploaded document. The owner is the caller and
/// new documents always start unverified.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument {
    pub application_id: Option<DbId>,
    pub document_type: DocumentType,
    #[validate(custom(function = "not_blank"))]
    pub file_name: String,
    #[validate(custom(function = "not_blank"))]
    pub file_url: String,
    #[validate(range(min = 0))]
    pub file_size: Option<i32>,
    pub mime_type: Option<String>,
    pub expiry_date: Option<Timestamp>,
}

/// DTO for updating a document. All fields are optional.
///
/// Setting `is_verified` to `true` records the caller as verifier; setting
/// it to `false` clears the verification.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocument {
    pub application_id: Option<DbId>,
    pub document_type: Option<DocumentType>,
    #[validate(custom(function = "not_blank"))]
    pub file_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub file_url: Option<String>,
    #[validate(range(min = 0))]
    pub file_size: Option<i32>,
    pub mime_type: Option<String>,
    pub is_verified: Option<bool>,
    pub expiry_date: Option<Timestamp>,
}
