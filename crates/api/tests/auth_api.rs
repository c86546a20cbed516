//! HTTP-level tests for registration, login, token refresh, logout and role
//! switching.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, post_empty_auth, post_json, post_json_auth, register, PASSWORD,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_tokens_and_student_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({ "email": "ada@portal.test", "password": PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["accessToken"].is_string());
    assert_eq!(json["refreshToken"].as_str().unwrap().len(), 64);
    assert_eq!(json["expiresIn"], 15 * 60);
    assert_eq!(json["user"]["email"], "ada@portal.test");
    assert_eq!(json["user"]["role"], "student");
    assert!(json["user"].get("passwordHash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_short_password_and_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/auth/register",
        serde_json::json!({ "email": "ada@portal.test", "password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({ "email": "not-an-email", "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_registration_is_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "dup@portal.test").await;

    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({ "email": "dup@portal.test", "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_checks_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "login@portal.test").await;

    let response = post_json(
        app.clone(),
        "/api/auth/login",
        serde_json::json!({ "email": "login@portal.test", "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app.clone(),
        "/api/auth/login",
        serde_json::json!({ "email": "login@portal.test", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": "ghost@portal.test", "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/auth/register",
        serde_json::json!({ "email": "rot@portal.test", "password": PASSWORD }),
    )
    .await;
    let json = body_json(response).await;
    let old_access = json["accessToken"].as_str().unwrap().to_string();
    let old_refresh = json["refreshToken"].as_str().unwrap().to_string();

    let response = post_json(
        app.clone(),
        "/api/auth/refresh",
        serde_json::json!({ "refreshToken": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let new_access = body_json(response).await["accessToken"]
        .as_str()
        .unwrap()
        .to_string();

    // The old refresh token is spent and its session revoked.
    let response = post_json(
        app.clone(),
        "/api/auth/refresh",
        serde_json::json!({ "refreshToken": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app.clone(), "/api/auth/user", &old_access).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/auth/user", &new_access).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_ends_every_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "bye@portal.test").await;

    let response = post_empty_auth(app.clone(), "/api/auth/logout", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, "/api/auth/user", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn current_user_includes_role_profile_or_null(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (id, token) = register(app.clone(), "me@portal.test").await;

    let json = body_json(get_auth(app.clone(), "/api/auth/user", &token).await).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["role"], "student");
    assert!(json["profile"].is_null());

    let response = post_json_auth(
        app.clone(),
        "/api/profiles/student",
        serde_json::json!({ "nationality": "Kenyan", "gpa": 3.6 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get_auth(app, "/api/auth/user", &token).await).await;
    assert_eq!(json["profile"]["nationality"], "Kenyan");
    assert_eq!(json["profile"]["gpa"], 3.6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn role_switch_applies_to_existing_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "switch@portal.test").await;

    let response = post_json_auth(
        app.clone(),
        "/api/auth/user/role",
        serde_json::json!({ "role": "agent" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], "agent");

    // Same token, new role: stats now have the agent shape.
    let json = body_json(get_auth(app.clone(), "/api/stats", &token).await).await;
    assert_eq!(json["ranking"], 3);

    let response = post_json_auth(
        app.clone(),
        "/api/switch-role",
        serde_json::json!({ "role": "agent" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        app,
        "/api/switch-role",
        serde_json::json!({ "role": "superuser" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
