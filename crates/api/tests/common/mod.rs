#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use portal_api::auth::jwt::JwtConfig;
use portal_api::config::ServerConfig;
use portal_api::router::build_app_router;
use portal_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 1,
        },
    }
}

/// Build the production router (same middleware stack) over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn post_empty_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub const PASSWORD: &str = "correct-horse-battery";

/// Register a user through the API, returning `(user_id, access_token)`.
pub async fn register(app: Router, email: &str) -> (i64, String) {
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "email": email,
            "password": PASSWORD,
            "firstName": "Test",
            "lastName": "User",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED, "registration of {email} should succeed");
    let json = body_json(response).await;
    let id = json["user"]["id"].as_i64().unwrap();
    let token = json["accessToken"].as_str().unwrap().to_string();
    (id, token)
}

/// Register a user and switch them to `role`, returning `(user_id, token)`.
pub async fn register_as(app: Router, email: &str, role: &str) -> (i64, String) {
    let (id, token) = register(app.clone(), email).await;
    let response = post_json_auth(
        app,
        "/api/switch-role",
        serde_json::json!({ "role": role }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    (id, token)
}

/// Create a university profile for the caller and one program under it.
/// Returns `(university_id, program_id)`.
pub async fn university_with_program(
    app: Router,
    token: &str,
    name: &str,
    country: &str,
    field: &str,
    tuition: i32,
) -> (i64, i64) {
    let response = post_json_auth(
        app.clone(),
        "/api/profiles/university",
        serde_json::json!({ "universityName": name, "country": country }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let university_id = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json_auth(
        app,
        &format!("/api/universities/{university_id}/programs"),
        serde_json::json!({
            "programName": format!("{field} MSc"),
            "degree": "Master",
            "field": field,
            "tuitionFee": tuition,
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let program_id = body_json(response).await["id"].as_i64().unwrap();
    (university_id, program_id)
}
