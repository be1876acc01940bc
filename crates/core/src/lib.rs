//! Domain logic for the Kafka governance backend.
//!
//! Everything in this crate is pure: no database or network access.

pub mod error;
pub mod pagination;
pub mod promotion;
pub mod request_id;
pub mod requests;
pub mod roles;
pub mod types;
pub mod validation;
