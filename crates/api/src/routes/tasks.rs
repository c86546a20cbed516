//! Route definitions for the `/tasks` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`. All require auth.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create
/// PUT  /{id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list).post(tasks::create))
        .route("/{id}", put(tasks::update))
}
