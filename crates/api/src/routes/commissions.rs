//! Route definitions for the `/commissions` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::commissions;
use crate::state::AppState;

/// Routes mounted at `/commissions`. All require auth.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create
/// PUT  /{id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(commissions::list).post(commissions::create))
        .route("/{id}", put(commissions::update))
}
