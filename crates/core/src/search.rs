//! University search filters.
//!
//! Filters arrive as loose query-string values. [`SearchFilters::parse`]
//! normalises them once so the repository only ever sees well-typed,
//! already-validated predicates.

use crate::error::CoreError;

/// Conjunctive filters for the university search. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Exact match on the university's country.
    pub country: Option<String>,
    /// Exact match on the program's field of study.
    pub field: Option<String>,
    /// Inclusive lower bound on program tuition.
    pub budget_min: Option<i32>,
    /// Inclusive upper bound on program tuition.
    pub budget_max: Option<i32>,
}

impl SearchFilters {
    /// Build filters from raw query values.
    ///
    /// - Blank strings count as omitted.
    /// - Budgets must be integers; a budget of 0 or less imposes no constraint.
    /// - `budget_min > budget_max` is rejected.
    pub fn parse(
        country: Option<&str>,
        field: Option<&str>,
        budget_min: Option<&str>,
        budget_max: Option<&str>,
    ) -> Result<Self, CoreError> {
        let filters = Self {
            country: non_blank(country),
            field: non_blank(field),
            budget_min: parse_budget("budgetMin", budget_min)?,
            budget_max: parse_budget("budgetMax", budget_max)?,
        };

        if let (Some(min), Some(max)) = (filters.budget_min, filters.budget_max) {
            if min > max {
                return Err(CoreError::Validation(format!(
                    "budgetMin ({min}) must not exceed budgetMax ({max})"
                )));
            }
        }

        Ok(filters)
    }

    /// Whether any program-level predicate is active.
    pub fn filters_programs(&self) -> bool {
        self.field.is_some() || self.budget_min.is_some() || self.budget_max.is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_budget(name: &str, value: Option<&str>) -> Result<Option<i32>, CoreError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let amount: i32 = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("{name} must be a whole number, got '{raw}'")))?;
    Ok((amount > 0).then_some(amount))
}
