//! ACL request and source-of-truth ACL models.

use kafkamgt_core::requests::TopicType;
use kafkamgt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `acl_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AclRequest {
    pub id: DbId,
    pub req_no: String,
    pub topic_name: String,
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
    pub consumer_group: Option<String>,
    pub requesting_team: String,
    pub approver: Option<String>,
    pub exec_time: Option<Timestamp>,
    pub decline_reason: Option<String>,
}

/// DTO for submitting an ACL request.
///
/// `team_name` is the team owning the topic; the requesting team is the
/// requestor's own team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAclRequest {
    pub topic_name: String,
    pub env: String,
    pub team_name: String,
    pub app_name: Option<String>,
    pub topic_type: TopicType,
    pub acl_ip: Option<String>,
    pub acl_ssl: Option<String>,
    pub consumer_group: Option<String>,
    pub remarks: Option<String>,
}

/// A row from the `acls` source-of-truth table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Acl {
    pub id: DbId,
    pub req_no: String,
    pub topic_name: String,
    pub env: String,
    pub team_name: String,
    pub consumer_group: Option<String>,
    pub topic_type: String,
    pub acl_ip: Option<String>,
    pub acl_ssl: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting into the `acls` source-of-truth table.
#[derive(Debug, Clone)]
pub struct CreateAcl {
    pub topic_name: String,
    pub env: String,
    pub team_name: String,
    pub consumer_group: Option<String>,
    pub topic_type: TopicType,
    pub acl_ip: Option<String>,
    pub acl_ssl: Option<String>,
}
