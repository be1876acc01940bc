//! Kafka environment (cluster connection) model.

use kafkamgt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `envs` table. Store passwords are never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Env {
    pub id: DbId,
    pub name: String,
    pub host: String,
    pub port: i32,
    pub protocol: String,
    pub env_type: String,
    pub keystore_location: Option<String>,
    pub truststore_location: Option<String>,
    #[serde(skip_serializing)]
    pub keystore_pwd: Option<String>,
    #[serde(skip_serializing)]
    pub key_pwd: Option<String>,
    #[serde(skip_serializing)]
    pub truststore_pwd: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering an environment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnv {
    #[validate(length(min = 1, max = 32, message = "name must be 1-32 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,
    #[validate(range(min = 1, max = 65535, message = "port must be 1-65535"))]
    pub port: i32,
    pub protocol: String,
    pub env_type: String,
    pub keystore_location: Option<String>,
    pub truststore_location: Option<String>,
    pub keystore_pwd: Option<String>,
    pub key_pwd: Option<String>,
    pub truststore_pwd: Option<String>,
}
