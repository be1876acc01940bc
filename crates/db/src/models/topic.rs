//! Topic request and source-of-truth topic models.

use kafkamgt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `topic_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopicRequest {
    pub id: DbId,
    pub topic_name: String,
    pub partitions: i32,
    pub replication_factor: i32,
    pub env: String,
    pub team_name: String,
    pub app_name: Option<String>,
    pub topic_type: String,
    pub requestor: String,
    pub request_time: Timestamp,
    pub acl_ip: Option<String>,
    pub acl_ssl: Option<String>,
    pub remarks: Option<String>,
    pub topic_status: String,
    pub approver: Option<String>,
    pub exec_time: Option<Timestamp>,
    pub decline_reason: Option<String>,
}

/// DTO for submitting a topic request.
///
/// The owning team is the requestor's team; it is not taken from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopicRequest {
    pub topic_name: String,
    pub partitions: i32,
    pub replication_factor: i32,
    pub env: String,
    pub app_name: Option<String>,
    pub acl_ip: Option<String>,
    pub acl_ssl: Option<String>,
    pub remarks: Option<String>,
}

/// A row from the `topics` source-of-truth table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub id: DbId,
    pub topic_name: String,
    pub env: String,
    pub team_name: String,
    pub app_name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting into the `topics` source-of-truth table.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopic {
    pub topic_name: String,
    pub env: String,
    pub team_name: String,
    pub app_name: Option<String>,
}

/// Request body for `POST /topics/promote`.
#[derive(Debug, Clone, Deserialize)]
pub struct PromoteTopic {
    pub topic_name: String,
    pub source_env: String,
    pub target_env: String,
}
