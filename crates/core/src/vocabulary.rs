//! Closed vocabularies stored as TEXT columns with CHECK constraints.
//!
//! Each enum's string form matches the literal used in the migration's CHECK
//! constraint and on the wire, so the same value round-trips through
//! Postgres, JSON and query strings unchanged.

use crate::error::CoreError;

macro_rules! define_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored / wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Parse the stored representation, returning `None` for unknown values.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value).ok_or_else(|| {
                    CoreError::Validation(format!("Invalid {}: '{value}'", $label))
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

define_vocabulary! {
    /// The role a user currently acts as. Exactly one at a time; mutable.
    Role("role") {
        Student = "student",
        Agent = "agent",
        University = "university",
        Admin = "admin",
    }
}

define_vocabulary! {
    /// Application workflow status.
    ///
    /// The order resembles a pipeline but no transition rules are enforced:
    /// any status may follow any other.
    ApplicationStatus("application status") {
        Draft = "draft",
        Submitted = "submitted",
        UnderReview = "under_review",
        InterviewScheduled = "interview_scheduled",
        OfferReceived = "offer_received",
        Rejected = "rejected",
        Enrolled = "enrolled",
        VisaApproved = "visa_approved",
        VisaRejected = "visa_rejected",
    }
}

define_vocabulary! {
    /// Kind of uploaded document.
    DocumentType("document type") {
        Passport = "passport",
        AcademicTranscripts = "academic_transcripts",
        IeltsToefl = "ielts_toefl",
        StatementOfPurpose = "statement_of_purpose",
        RecommendationLetter = "recommendation_letter",
        CvResume = "cv_resume",
        FinancialDocuments = "financial_documents",
        Other = "other",
    }
}

define_vocabulary! {
    TaskPriority("task priority") {
        Low = "low",
        Medium = "medium",
        High = "high",
    }
}

define_vocabulary! {
    CommissionStatus("commission status") {
        Pending = "pending",
        Paid = "paid",
        Cancelled = "cancelled",
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Draft
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

impl Default for CommissionStatus {
    fn default() -> Self {
        CommissionStatus::Pending
    }
}

impl ApplicationStatus {
    /// Statuses after which an application no longer counts as an active lead.
    pub const TERMINAL: &'static [ApplicationStatus] =
        &[ApplicationStatus::Enrolled, ApplicationStatus::Rejected];

    /// Statuses that count towards an agent's success rate.
    pub const SUCCESSFUL: &'static [ApplicationStatus] =
        &[ApplicationStatus::OfferReceived, ApplicationStatus::Enrolled];

    /// Statuses considered when deriving a student's visa status.
    pub const VISA_RELEVANT: &'static [ApplicationStatus] = &[
        ApplicationStatus::VisaApproved,
        ApplicationStatus::VisaRejected,
        ApplicationStatus::Enrolled,
    ];

    /// Whether the application is still an active lead (not enrolled or rejected).
    pub fn is_active(self) -> bool {
        !Self::TERMINAL.contains(&self)
    }

    /// String forms of a status set, for binding as a Postgres `TEXT[]`.
    pub fn names(set: &[ApplicationStatus]) -> Vec<&'static str> {
        set.iter().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn unknown_role_is_validation_error() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("role"));
    }

    #[test]
    fn application_status_has_nine_values_in_pipeline_order() {
        let names: Vec<_> = ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            [
                "draft",
                "submitted",
                "under_review",
                "interview_scheduled",
                "offer_received",
                "rejected",
                "enrolled",
                "visa_approved",
                "visa_rejected",
            ]
        );
    }

    #[test]
    fn terminal_statuses_are_not_active() {
        assert!(!ApplicationStatus::Enrolled.is_active());
        assert!(!ApplicationStatus::Rejected.is_active());
        assert!(ApplicationStatus::Draft.is_active());
        assert!(ApplicationStatus::VisaApproved.is_active());
    }

    #[test]
    fn serde_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&ApplicationStatus::InterviewScheduled).unwrap();
        assert_eq!(json, "\"interview_scheduled\"");

        let parsed: DocumentType = serde_json::from_str("\"ielts_toefl\"").unwrap();
        assert_eq!(parsed, DocumentType::IeltsToefl);
    }

    #[test]
    fn try_from_string_matches_parse() {
        assert_eq!(
            TaskPriority::try_from("high".to_string()).unwrap(),
            TaskPriority::High
        );
        assert!(CommissionStatus::try_from("refunded".to_string()).is_err());
    }

    #[test]
    fn defaults_match_column_defaults() {
        assert_eq!(Role::default(), Role::Student);
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Draft);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
        assert_eq!(CommissionStatus::default(), CommissionStatus::Pending);
    }

    #[test]
    fn names_preserve_set_order() {
        assert_eq!(
            ApplicationStatus::names(ApplicationStatus::SUCCESSFUL),
            vec!["offer_received", "enrolled"]
        );
    }
}
