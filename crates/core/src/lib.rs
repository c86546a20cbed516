//! Domain layer for the study-abroad portal.
//!
//! Pure types and rules with no I/O: identifiers, the error taxonomy, the
//! closed vocabularies stored in the database, statistics arithmetic and
//! search filter parsing. Both the repository layer and the HTTP layer build
//! on these.

pub mod error;
pub mod search;
pub mod stats;
pub mod types;
pub mod validation;
pub mod vocabulary;
