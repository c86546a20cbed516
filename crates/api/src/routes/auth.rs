//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register   -> register
/// POST /login      -> login
/// POST /refresh    -> refresh
/// POST /logout     -> logout (requires auth)
/// GET  /user       -> current_user (requires auth)
/// POST /user/role  -> update_role (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
        .route("/user/role", post(auth::update_role))
}
