//! HTTP-level tests for the `/tasks` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth, register};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_and_completion_stamp(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "student@portal.test").await;

    let response = post_json_auth(
        app.clone(),
        "/api/tasks",
        serde_json::json!({ "title": "Book IELTS", "dueDate": "2026-11-01T09:00:00Z" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let task = body_json(response).await;
    assert_eq!(task["priority"], "medium");
    assert_eq!(task["isCompleted"], false);
    let id = task["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/tasks/{id}"),
        serde_json::json!({ "isCompleted": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let done = body_json(response).await;
    assert_eq!(done["isCompleted"], true);
    assert!(done["completedAt"].is_string());

    let response = put_json_auth(
        app.clone(),
        &format!("/api/tasks/{id}"),
        serde_json::json!({ "isCompleted": false, "priority": "high" }),
        &token,
    )
    .await;
    let reopened = body_json(response).await;
    assert!(reopened["completedAt"].is_null());
    assert_eq!(reopened["priority"], "high");

    let listed = body_json(get_auth(app, "/api/tasks", &token).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tasks_are_private_to_their_owner_in_lists(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner) = register(app.clone(), "owner@portal.test").await;
    let (_, other) = register(app.clone(), "other@portal.test").await;

    post_json_auth(
        app.clone(),
        "/api/tasks",
        serde_json::json!({ "title": "Upload transcript" }),
        &owner,
    )
    .await;

    let listed = body_json(get_auth(app, "/api/tasks", &other).await).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_title_and_missing_task(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "student@portal.test").await;

    let response = post_json_auth(
        app.clone(),
        "/api/tasks",
        serde_json::json!({ "title": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        "/api/tasks/31337",
        serde_json::json!({ "isCompleted": true }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
