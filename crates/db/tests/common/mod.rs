//! Fixture builders shared by the database integration tests.

#![allow(dead_code)]

use portal_core::types::DbId;
use portal_core::vocabulary::{ApplicationStatus, Role};
use portal_db::models::application::{Application, CreateApplication, UpdateApplication};
use portal_db::models::profile::{CreateUniversityProfile, UniversityProfile};
use portal_db::models::program::{CreateProgram, UniversityProgram};
use portal_db::models::user::{CreateUser, User};
use portal_db::repositories::{ApplicationRepo, ProgramRepo, UniversityProfileRepo, UserRepo};
use sqlx::PgPool;

pub async fn user(pool: &PgPool, email: &str, role: Role) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            first_name: Some("Test".into()),
            last_name: Some("User".into()),
            password_hash: "not-a-real-hash".into(),
            role,
        },
    )
    .await
    .unwrap()
}

pub fn new_university(name: &str, country: &str) -> CreateUniversityProfile {
    CreateUniversityProfile {
        university_name: name.to_string(),
        country: country.to_string(),
        city: None,
        address: None,
        website: None,
        ranking: None,
        description: None,
        logo_url: None,
    }
}

/// A university user plus its profile.
pub async fn university(pool: &PgPool, name: &str, country: &str) -> UniversityProfile {
    let email = format!("{}@uni.test", name.to_lowercase().replace(' ', "-"));
    let owner = user(pool, &email, Role::University).await;
    UniversityProfileRepo::create(pool, owner.id, &new_university(name, country))
        .await
        .unwrap()
}

pub fn new_program(name: &str, field: &str, tuition_fee: Option<i32>) -> CreateProgram {
    CreateProgram {
        program_name: name.to_string(),
        degree: "Master".into(),
        field: field.to_string(),
        duration: Some(24),
        tuition_fee,
        currency: None,
        requirements: None,
        application_deadline: None,
        start_date: None,
        scholarship_available: None,
        scholarship_amount: None,
    }
}

pub async fn program(
    pool: &PgPool,
    university_id: DbId,
    name: &str,
    field: &str,
    tuition_fee: Option<i32>,
) -> UniversityProgram {
    ProgramRepo::create(pool, university_id, &new_program(name, field, tuition_fee))
        .await
        .unwrap()
}

pub fn new_application(
    agent_id: Option<DbId>,
    university_id: DbId,
    program_id: DbId,
    status: Option<ApplicationStatus>,
) -> CreateApplication {
    CreateApplication {
        agent_id,
        university_id,
        program_id,
        status,
        submitted_at: None,
        notes: None,
    }
}

pub async fn application(
    pool: &PgPool,
    student_id: DbId,
    agent_id: Option<DbId>,
    program: &UniversityProgram,
    status: ApplicationStatus,
) -> Application {
    ApplicationRepo::create(
        pool,
        student_id,
        &new_application(agent_id, program.university_id, program.id, Some(status)),
    )
    .await
    .unwrap()
}

pub async fn set_status(pool: &PgPool, id: DbId, status: ApplicationStatus) -> Application {
    let update = UpdateApplication {
        status: Some(status),
        ..Default::default()
    };
    ApplicationRepo::update(pool, id, &update).await.unwrap().unwrap()
}
