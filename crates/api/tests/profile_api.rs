//! HTTP-level tests for the `/profiles` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json_auth, put_json_auth, register, register_as};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_create_conflicts_and_put_updates(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "student@portal.test").await;

    let body = serde_json::json!({ "nationality": "Peruvian", "budgetMax": 30000 });
    let response = post_json_auth(app.clone(), "/api/profiles/student", body.clone(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app.clone(), "/api/profiles/student", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_json_auth(
        app,
        "/api/profiles/student",
        serde_json::json!({ "ieltsScore": 7.5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["nationality"], "Peruvian");
    assert_eq!(json["ieltsScore"], 7.5);
    assert_eq!(json["budgetMax"], 30000);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_creates_missing_agent_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, token) = register_as(app.clone(), "agent@portal.test", "agent").await;

    let response = put_json_auth(
        app,
        "/api/profiles/agent",
        serde_json::json!({ "companyName": "Global Pathways", "commissionRate": 12.5 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["userId"], user_id);
    assert_eq!(json["companyName"], "Global Pathways");
    assert_eq!(json["isActive"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn university_first_write_needs_name_and_country(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register_as(app.clone(), "uni@portal.test", "university").await;

    let response = put_json_auth(
        app.clone(),
        "/api/profiles/university",
        serde_json::json!({ "city": "Halifax" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app.clone(),
        "/api/profiles/university",
        serde_json::json!({ "universityName": "Northbridge", "country": "Canada" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        app,
        "/api/profiles/university",
        serde_json::json!({ "city": "Halifax" }),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["universityName"], "Northbridge");
    assert_eq!(json["city"], "Halifax");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_values_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "student@portal.test").await;

    let response = post_json_auth(
        app.clone(),
        "/api/profiles/student",
        serde_json::json!({ "gpa": 9.9 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/profiles/student",
        serde_json::json!({ "budgetMin": 50000, "budgetMax": 100 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
