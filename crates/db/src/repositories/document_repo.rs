//! Repository for the `documents` table.

use portal_core::types::DbId;
use portal_core::vocabulary::DocumentType;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, Document, UpdateDocument};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, application_id, document_type, file_name, file_url, \
                        file_size, mime_type, is_verified, verified_by, verified_at, \
                        expiry_date, created_at, updated_at";

/// Provides CRUD operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a document owned by `user_id`. New documents are unverified.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents
                (user_id, application_id, document_type, file_name, file_url, file_size,
                 mime_type, expiry_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(user_id)
            .bind(input.application_id)
            .bind(input.document_type.as_str())
            .bind(&input.file_name)
            .bind(&input.file_url)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(input.expiry_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's documents, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Documents linked to an application, newest first.
    pub async fn list_by_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE application_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }

    /// Update a document. Only non-`None` fields in `input` are applied.
    ///
    /// `is_verified = true` records `verifier_id` and the current time;
    /// `is_verified = false` clears both. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        verifier_id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                application_id = COALESCE($2, application_id),
                document_type = COALESCE($3, document_type),
                file_name = COALESCE($4, file_name),
                file_url = COALESCE($5, file_url),
                file_size = COALESCE($6, file_size),
                mime_type = COALESCE($7, mime_type),
                expiry_date = COALESCE($8, expiry_date),
                is_verified = COALESCE($9, is_verified),
                verified_by = CASE
                    WHEN $9 IS NULL THEN verified_by
                    WHEN $9 THEN $10
                    ELSE NULL
                END,
                verified_at = CASE
                    WHEN $9 IS NULL THEN verified_at
                    WHEN $9 THEN NOW()
                    ELSE NULL
                END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(input.application_id)
            .bind(input.document_type.map(DocumentType::as_str))
            .bind(&input.file_name)
            .bind(&input.file_url)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(input.expiry_date)
            .bind(input.is_verified)
            .bind(verifier_id)
            .fetch_optional(pool)
            .await
    }
}
