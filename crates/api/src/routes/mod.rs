pub mod applications;
pub mod auth;
pub mod commissions;
pub mod documents;
pub mod health;
pub mod profiles;
pub mod tasks;
pub mod universities;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout
/// /auth/user                           current user + role profile
/// /auth/user/role                      change role
/// /switch-role                         change role
///
/// /profiles/student                    create, upsert
/// /profiles/agent                      create, upsert
/// /profiles/university                 create, upsert
///
/// /universities                        list (public)
/// /universities/search                 search (public)
/// /universities/{id}/programs          list (public), create
/// /programs/{university_id}            list (public)
///
/// /applications                        list, create
/// /applications/{id}                   get, update
/// /applications/{id}/documents         list
///
/// /documents                           list, create
/// /documents/{id}                      update
///
/// /tasks                               list, create
/// /tasks/{id}                          update
///
/// /commissions                         list, create
/// /commissions/{id}                    update
///
/// /stats                               role-dependent dashboard stats
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/switch-role", post(handlers::auth::update_role))
        .nest("/profiles", profiles::router())
        .nest("/universities", universities::router())
        .nest("/programs", universities::programs_router())
        .nest("/applications", applications::router())
        .nest("/documents", documents::router())
        .nest("/tasks", tasks::router())
        .nest("/commissions", commissions::router())
        .route("/stats", get(handlers::stats::get_stats))
}
