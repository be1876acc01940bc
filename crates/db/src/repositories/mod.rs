//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or a connection, when the call is one step of a larger
//! transaction) as the first argument.

pub mod acl_repo;
pub mod acl_request_repo;
pub mod activity_log_repo;
pub mod env_repo;
pub mod schema_request_repo;
pub mod team_repo;
pub mod topic_repo;
pub mod topic_request_repo;
pub mod user_repo;

pub use acl_repo::AclRepo;
pub use acl_request_repo::AclRequestRepo;
pub use activity_log_repo::ActivityLogRepo;
pub use env_repo::EnvRepo;
pub use schema_request_repo::{SchemaKey, SchemaRequestRepo};
pub use team_repo::TeamRepo;
pub use topic_repo::TopicRepo;
pub use topic_request_repo::TopicRequestRepo;
pub use user_repo::UserRepo;
