//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Single-record lookups return
//! `Option`, list lookups a possibly-empty `Vec`.

pub mod application_repo;
pub mod commission_repo;
pub mod document_repo;
pub mod profile_repo;
pub mod program_repo;
pub mod search_repo;
pub mod session_repo;
pub mod stats_repo;
pub mod task_repo;
pub mod user_repo;

pub use application_repo::{ApplicationRepo, ApplicationScope};
pub use commission_repo::CommissionRepo;
pub use document_repo::DocumentRepo;
pub use profile_repo::{AgentProfileRepo, StudentProfileRepo, UniversityProfileRepo};
pub use program_repo::ProgramRepo;
pub use search_repo::SearchRepo;
pub use session_repo::SessionRepo;
pub use stats_repo::StatsRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
