//! Route definitions for the `/profiles` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/profiles`. All require auth.
///
/// ```text
/// POST /student     -> create_student
/// PUT  /student     -> update_student
/// POST /agent       -> create_agent
/// PUT  /agent       -> update_agent
/// POST /university  -> create_university
/// PUT  /university  -> update_university
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/student",
            post(profiles::create_student).put(profiles::update_student),
        )
        .route(
            "/agent",
            post(profiles::create_agent).put(profiles::update_agent),
        )
        .route(
            "/university",
            post(profiles::create_university).put(profiles::update_university),
        )
}
