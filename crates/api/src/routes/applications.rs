//! Route definitions for the `/applications` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Routes mounted at `/applications`. All require auth.
///
/// ```text
/// GET  /                 -> list
/// POST /                 -> create
/// GET  /{id}             -> get_by_id
/// PUT  /{id}             -> update
/// GET  /{id}/documents   -> list_documents
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(applications::list).post(applications::create))
        .route(
            "/{id}",
            get(applications::get_by_id).put(applications::update),
        )
        .route("/{id}/documents", get(applications::list_documents))
}
