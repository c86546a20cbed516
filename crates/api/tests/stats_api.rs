//! HTTP-level tests for `GET /api/stats`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get_auth, post_json_auth, put_json_auth, register, register_as,
    university_with_program,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_student_has_zeroed_stats(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "student@portal.test").await;

    let response = get_auth(app, "/api/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "totalApplications": 0,
            "offerLetters": 0,
            "pendingReviews": 0,
            "visaStatus": "In Progress",
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn university_without_profile_gets_empty_object(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register_as(app.clone(), "uni@portal.test", "university").await;

    let json = body_json(get_auth(app, "/api/stats", &token).await).await;
    assert_eq!(json, serde_json::json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn agent_stats_reflect_assigned_applications_and_commissions(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, uni_token) = register_as(app.clone(), "uni@portal.test", "university").await;
    let (university_id, program_id) =
        university_with_program(app.clone(), &uni_token, "Northbridge", "Canada", "CS", 20_000)
            .await;
    let (agent_id, agent_token) = register_as(app.clone(), "agent@portal.test", "agent").await;
    let (_, student_token) = register(app.clone(), "student@portal.test").await;

    let mut ids = Vec::new();
    for _ in 0..4 {
        let response = post_json_auth(
            app.clone(),
            "/api/applications",
            serde_json::json!({
                "universityId": university_id,
                "programId": program_id,
                "agentId": agent_id,
            }),
            &student_token,
        )
        .await;
        ids.push(body_json(response).await["id"].as_i64().unwrap());
    }
    for (id, status) in ids.iter().zip(["offer_received", "enrolled", "rejected"]) {
        put_json_auth(
            app.clone(),
            &format!("/api/applications/{id}"),
            serde_json::json!({ "status": status }),
            &agent_token,
        )
        .await;
    }

    let response = post_json_auth(
        app.clone(),
        "/api/commissions",
        serde_json::json!({ "applicationId": ids[1], "amount": 1200.5 }),
        &agent_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get_auth(app, "/api/stats", &agent_token).await).await;
    assert_eq!(json["activeLeads"], 2);
    assert_eq!(json["successRate"], 50);
    assert_eq!(json["monthlyCommission"], 1200.5);
    assert_eq!(json["ranking"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn university_and_admin_stats(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, uni_token) = register_as(app.clone(), "uni@portal.test", "university").await;
    let (university_id, program_id) =
        university_with_program(app.clone(), &uni_token, "Northbridge", "Canada", "CS", 20_000)
            .await;
    let (_, student_token) = register(app.clone(), "student@portal.test").await;

    for status in ["submitted", "offer_received"] {
        let response = post_json_auth(
            app.clone(),
            "/api/applications",
            serde_json::json!({
                "universityId": university_id,
                "programId": program_id,
                "status": status,
            }),
            &student_token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get_auth(app.clone(), "/api/stats", &uni_token).await).await;
    assert_eq!(json["newApplications"], 1);
    assert_eq!(json["offersSent"], 1);
    assert_eq!(json["enrolledStudents"], 0);
    assert_eq!(json["acceptanceRate"], 50);

    let (_, admin_token) = register_as(app.clone(), "admin@portal.test", "admin").await;
    let json = body_json(get_auth(app, "/api/stats", &admin_token).await).await;
    assert_eq!(json["totalUsers"], 3);
    assert_eq!(json["universities"], 1);
    assert_eq!(json["activeApplications"], 2);
    assert_eq!(json["monthlyRevenue"], 0.0);
}
