//! Role profile models: one-to-one extensions of a user row.
//!
//! Student and agent profiles have no required columns, so a single input
//! DTO serves both create and partial update. University profiles require a
//! name and country on creation.

use portal_core::error::CoreError;
use portal_core::types::{DbId, Timestamp};
use portal_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A row from `student_profiles`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub date_of_birth: Option<Timestamp>,
    pub nationality: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub gpa: Option<f64>,
    pub ielts_score: Option<f64>,
    pub toefl_score: Option<i32>,
    pub preferred_countries: Option<Vec<String>>,
    pub preferred_fields: Option<Vec<String>>,
    pub budget_min: Option<i32>,
    pub budget_max: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create / partial-update DTO for student profiles.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_student_budget"))]
pub struct StudentProfileInput {
    pub date_of_birth: Option<Timestamp>,
    pub nationality: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub gpa: Option<f64>,
    #[validate(range(min = 0.0, max = 9.0))]
    pub ielts_score: Option<f64>,
    #[validate(range(min = 0, max = 120))]
    pub toefl_score: Option<i32>,
    pub preferred_countries: Option<Vec<String>>,
    pub preferred_fields: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub budget_min: Option<i32>,
    #[validate(range(min = 0))]
    pub budget_max: Option<i32>,
}

fn validate_student_budget(input: &StudentProfileInput) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (input.budget_min, input.budget_max) {
        if min > max {
            return Err(ValidationError::new("budget_range")
                .with_message("budgetMin must not exceed budgetMax".into()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// A row from `agent_profiles`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub company_name: Option<String>,
    pub license_number: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub specializations: Option<Vec<String>>,
    pub commission_rate: Option<f64>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create / partial-update DTO for agent profiles.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfileInput {
    pub company_name: Option<String>,
    pub license_number: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub specializations: Option<Vec<String>>,
    /// Percentage, 0-100.
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission_rate: Option<f64>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// University
// ---------------------------------------------------------------------------

/// A row from `university_profiles`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub university_name: String,
    pub country: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub ranking: Option<i32>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a university profile.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUniversityProfile {
    #[validate(custom(function = "not_blank"))]
    pub university_name: String,
    #[validate(custom(function = "not_blank"))]
    pub country: String,
    pub city: Option<String>,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(range(min = 1))]
    pub ranking: Option<i32>,
    pub description: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

/// DTO for updating a university profile. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUniversityProfile {
    #[validate(custom(function = "not_blank"))]
    pub university_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(range(min = 1))]
    pub ranking: Option<i32>,
    pub description: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUniversityProfile {
    /// Promote a partial update into a create, for lazily creating the
    /// profile on first write. Name and country must be present.
    pub fn into_create(self) -> Result<CreateUniversityProfile, CoreError> {
        let (Some(university_name), Some(country)) = (self.university_name, self.country) else {
            return Err(CoreError::Validation(
                "universityName and country are required to create a university profile".into(),
            ));
        };
        Ok(CreateUniversityProfile {
            university_name,
            country,
            city: self.city,
            address: self.address,
            website: self.website,
            ranking: self.ranking,
            description: self.description,
            logo_url: self.logo_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_budget_range_must_be_ordered() {
        let input = StudentProfileInput {
            budget_min: Some(30_000),
            budget_max: Some(10_000),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_student_input_is_valid() {
        assert!(StudentProfileInput::default().validate().is_ok());
    }

    #[test]
    fn gpa_out_of_range_fails() {
        let input = StudentProfileInput {
            gpa: Some(7.5),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn university_create_requires_non_blank_name() {
        let input = CreateUniversityProfile {
            university_name: "  ".into(),
            country: "Canada".into(),
            city: None,
            address: None,
            website: None,
            ranking: None,
            description: None,
            logo_url: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn partial_update_promotes_only_with_name_and_country() {
        let missing = UpdateUniversityProfile {
            university_name: Some("Northbridge".into()),
            ..Default::default()
        };
        assert!(missing.into_create().is_err());

        let complete = UpdateUniversityProfile {
            university_name: Some("Northbridge".into()),
            country: Some("Canada".into()),
            city: Some("Halifax".into()),
            ..Default::default()
        };
        let create = complete.into_create().unwrap();
        assert_eq!(create.university_name, "Northbridge");
        assert_eq!(create.city.as_deref(), Some("Halifax"));
    }
}
