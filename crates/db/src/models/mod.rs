//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts (owner ids are
//!   passed to the repository separately, never taken from the body)
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! All wire names are camelCase.

pub mod application;
pub mod commission;
pub mod document;
pub mod profile;
pub mod program;
pub mod search;
pub mod session;
pub mod task;
pub mod user;
