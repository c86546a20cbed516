//! Query-string parameter types for API handlers.

use serde::Deserialize;

/// `GET /universities/search` parameters.
///
/// Kept as raw strings so that parsing and blank handling happen in one
/// place, `SearchFilters::parse`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub country: Option<String>,
    pub field: Option<String>,
    pub budget_min: Option<String>,
    pub budget_max: Option<String>,
}
