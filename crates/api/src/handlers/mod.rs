//! HTTP handlers, one module per resource.

pub mod applications;
pub mod auth;
pub mod commissions;
pub mod documents;
pub mod profiles;
pub mod stats;
pub mod tasks;
pub mod universities;

use portal_core::types::DbId;

use crate::middleware::auth::AuthUser;

/// Log writes by a caller who does not own the record.
///
/// Any authenticated caller may update any application, task, document or
/// commission by id; these writes are allowed but leave a trail.
pub(crate) fn note_foreign_write(
    caller: &AuthUser,
    entity: &'static str,
    id: DbId,
    owner_ids: &[DbId],
) {
    if !owner_ids.contains(&caller.user_id) {
        tracing::warn!(
            user_id = caller.user_id,
            role = %caller.role,
            entity,
            id,
            "Write to a record the caller does not own",
        );
    }
}
