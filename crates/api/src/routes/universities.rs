//! Route definitions for the university catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::universities;
use crate::state::AppState;

/// Routes mounted at `/universities`.
///
/// ```text
/// GET  /                -> list
/// GET  /search          -> search
/// GET  /{id}/programs   -> list_programs
/// POST /{id}/programs   -> create_program (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(universities::list))
        .route("/search", get(universities::search))
        .route(
            "/{id}/programs",
            get(universities::list_programs).post(universities::create_program),
        )
}

/// Routes mounted at `/programs`.
///
/// ```text
/// GET /{university_id}  -> list_programs
/// ```
pub fn programs_router() -> Router<AppState> {
    Router::new().route("/{university_id}", get(universities::list_programs))
}
