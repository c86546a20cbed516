//! Per-role dashboard statistics.
//!
//! The repository layer supplies raw counts and sums; this module turns them
//! into the fixed-shape objects served by `GET /stats`. All percentages are
//! integer-rounded and fall back to 0 when there is nothing to divide by.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::types::Timestamp;
use crate::vocabulary::ApplicationStatus;

/// Agents have no real leaderboard yet; every agent reports this rank.
pub const AGENT_RANKING_PLACEHOLDER: i64 = 3;

/// `round(100 * part / total)`, or 0 when `total` is not positive.
pub fn percentage(part: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as i64
}

/// First instant of the calendar month containing `now` (UTC).
pub fn month_start(now: Timestamp) -> Timestamp {
    now.date_naive()
        .with_day(1)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|start| start.and_utc())
        .unwrap_or(now)
}

/// Convenience for [`month_start`] at the current time.
pub fn current_month_start() -> Timestamp {
    month_start(Utc::now())
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A student's visa outcome as shown on their dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VisaStatus {
    #[serde(rename = "Approved")]
    Approved,
    #[serde(rename = "Rejected")]
    Rejected,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl VisaStatus {
    /// Derive from the most recently updated visa-relevant application status.
    ///
    /// `enrolled` counts as relevant but still reads as in progress.
    pub fn from_latest(status: Option<ApplicationStatus>) -> Self {
        match status {
            Some(ApplicationStatus::VisaApproved) => VisaStatus::Approved,
            Some(ApplicationStatus::VisaRejected) => VisaStatus::Rejected,
            _ => VisaStatus::InProgress,
        }
    }
}

/// Raw inputs for [`StudentStats`].
#[derive(Debug, Clone, Default)]
pub struct StudentCounts {
    pub total: i64,
    pub offers: i64,
    pub under_review: i64,
    pub latest_visa_status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub total_applications: i64,
    pub offer_letters: i64,
    pub pending_reviews: i64,
    pub visa_status: VisaStatus,
}

impl StudentStats {
    pub fn compute(counts: StudentCounts) -> Self {
        Self {
            total_applications: counts.total,
            offer_letters: counts.offers,
            pending_reviews: counts.under_review,
            visa_status: VisaStatus::from_latest(counts.latest_visa_status),
        }
    }
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// Raw inputs for [`AgentStats`].
#[derive(Debug, Clone, Default)]
pub struct AgentCounts {
    pub total: i64,
    pub active: i64,
    pub successful: i64,
    pub monthly_commission: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    pub active_leads: i64,
    pub success_rate: i64,
    pub monthly_commission: f64,
    pub ranking: i64,
}

impl AgentStats {
    pub fn compute(counts: AgentCounts) -> Self {
        Self {
            active_leads: counts.active,
            success_rate: percentage(counts.successful, counts.total),
            monthly_commission: counts.monthly_commission,
            ranking: AGENT_RANKING_PLACEHOLDER,
        }
    }
}

// ---------------------------------------------------------------------------
// University
// ---------------------------------------------------------------------------

/// Raw inputs for [`UniversityStats`].
#[derive(Debug, Clone, Default)]
pub struct UniversityCounts {
    pub total: i64,
    pub submitted: i64,
    pub offers: i64,
    pub enrolled: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityStats {
    pub new_applications: i64,
    pub offers_sent: i64,
    pub enrolled_students: i64,
    pub acceptance_rate: i64,
}

impl UniversityStats {
    pub fn compute(counts: UniversityCounts) -> Self {
        Self {
            new_applications: counts.submitted,
            offers_sent: counts.offers,
            enrolled_students: counts.enrolled,
            acceptance_rate: percentage(counts.offers, counts.total),
        }
    }
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: i64,
    pub universities: i64,
    pub active_applications: i64,
    pub monthly_revenue: f64,
}

// ---------------------------------------------------------------------------
// Role dispatch
// ---------------------------------------------------------------------------

/// Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmptyStats {}

/// Whatever statistics apply to the caller's role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoleStats {
    Student(StudentStats),
    Agent(AgentStats),
    University(UniversityStats),
    Admin(AdminStats),
    /// A university-role caller who has not created a profile yet.
    Empty(EmptyStats),
}
