//! HTTP-level tests for the `/commissions` resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, post_json_auth, put_json_auth, register, register_as,
    university_with_program,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn paying_a_commission_stamps_paid_at(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, uni) = register_as(app.clone(), "uni@portal.test", "university").await;
    let (university_id, program_id) =
        university_with_program(app.clone(), &uni, "Northbridge", "Canada", "CS", 20_000).await;
    let (agent_id, agent) = register_as(app.clone(), "agent@portal.test", "agent").await;
    let (_, student) = register(app.clone(), "student@portal.test").await;

    let response = post_json_auth(
        app.clone(),
        "/api/applications",
        serde_json::json!({
            "universityId": university_id,
            "programId": program_id,
            "agentId": agent_id,
        }),
        &student,
    )
    .await;
    let application_id = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/commissions",
        serde_json::json!({ "applicationId": application_id, "amount": 800 }),
        &agent,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["agentId"], agent_id);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["currency"], "USD");
    assert!(created["paidAt"].is_null());
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/commissions/{id}"),
        serde_json::json!({ "status": "paid" }),
        &agent,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["paidAt"].is_string());

    let listed = body_json(get_auth(app.clone(), "/api/commissions", &agent).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["amount"], 800.0);

    let empty = body_json(get_auth(app, "/api/commissions", &student).await).await;
    assert_eq!(empty, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn commission_for_missing_application_is_invalid_reference(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, agent) = register_as(app.clone(), "agent@portal.test", "agent").await;

    let response = post_json_auth(
        app,
        "/api/commissions",
        serde_json::json!({ "applicationId": 555_555, "amount": 10 }),
        &agent,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}
