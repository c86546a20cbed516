//! Route definitions for the `/documents` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Routes mounted at `/documents`. All require auth.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create
/// PUT  /{id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(documents::list).post(documents::create))
        .route("/{id}", put(documents::update))
}
