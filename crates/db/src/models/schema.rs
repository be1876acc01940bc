//! Schema request model.

use kafkamgt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `schema_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SchemaRequest {
    pub id: DbId,
    pub topic_name: String,
    pub env: String,
    pub team_name: String,
    pub app_name: Option<String>,
    pub requestor: String,
    pub request_time: Timestamp,
    pub schema_full: String,
    pub remarks: Option<String>,
    pub topic_status: String,
    pub version_schema: String,
    pub approver: Option<String>,
    pub exec_time: Option<Timestamp>,
    pub decline_reason: Option<String>,
}

/// DTO for submitting a schema request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSchemaRequest {
    pub topic_name: String,
    #[validate(length(min = 1, message = "env must not be empty"))]
    pub env: String,
    pub app_name: Option<String>,
    #[validate(length(min = 1, message = "schema must not be empty"))]
    pub schema_full: String,
    #[validate(length(min = 1, max = 32, message = "schema version must be 1-32 characters"))]
    pub version_schema: String,
    pub remarks: Option<String>,
}
