//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod acl;
pub mod activity;
pub mod decision;
pub mod env;
pub mod schema;
pub mod team;
pub mod topic;
pub mod user;
