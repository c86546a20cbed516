//! University search result shape.

use serde::Serialize;

use crate::models::profile::UniversityProfile;
use crate::models::program::UniversityProgram;

/// An active university with the programs that matched the program filters.
///
/// `programs` may be empty: a university is never dropped because none of
/// its programs matched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversitySearchResult {
    #[serde(flatten)]
    pub university: UniversityProfile,
    pub programs: Vec<UniversityProgram>,
}
