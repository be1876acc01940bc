//! Request status, topic type and activity-log vocabulary.
//!
//! The string forms are what the database stores in `topic_status`,
//! `topic_type` and the `activity_log` columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle marker stored in the `topic_status` column of every request table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Created,
    Approved,
    Declined,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Created => "created",
            RequestStatus::Approved => "approved",
            RequestStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(RequestStatus::Created),
            "approved" => Ok(RequestStatus::Approved),
            "declined" => Ok(RequestStatus::Declined),
            other => Err(format!(
                "Invalid request status '{other}'. Must be one of: created, approved, declined"
            )),
        }
    }
}

/// Direction of access an ACL grants on a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicType {
    Producer,
    Consumer,
}

impl TopicType {
    pub fn as_str(self) -> &'static str {
        match self {
            TopicType::Producer => "Producer",
            TopicType::Consumer => "Consumer",
        }
    }
}

impl fmt::Display for TopicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Producer" => Ok(TopicType::Producer),
            "Consumer" => Ok(TopicType::Consumer),
            other => Err(format!(
                "Invalid topic type '{other}'. Must be one of: Producer, Consumer"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Activity log vocabulary
// ---------------------------------------------------------------------------

pub const ACTIVITY_TOPIC_REQUEST: &str = "topicRequest";
pub const ACTIVITY_ACL: &str = "acl";
pub const ACTIVITY_SCHEMA_REQUEST: &str = "schemaRequest";

pub const ACTIVITY_TYPE_NEW: &str = "new";
pub const ACTIVITY_TYPE_APPROVED: &str = "approved";
pub const ACTIVITY_TYPE_DECLINED: &str = "declined";

/// Map a final request status to its activity type.
pub fn activity_type_for(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Created => ACTIVITY_TYPE_NEW,
        RequestStatus::Approved => ACTIVITY_TYPE_APPROVED,
        RequestStatus::Declined => ACTIVITY_TYPE_DECLINED,
    }
}

/// Activity-log details for an ACL request: the principal, topic, consumer
/// group and direction joined with `-`. Missing values render as `null`.
pub fn acl_activity_details(
    acl_ip: Option<&str>,
    topic_name: &str,
    acl_ssl: Option<&str>,
    consumer_group: Option<&str>,
    topic_type: TopicType,
) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        acl_ip.unwrap_or("null"),
        topic_name,
        acl_ssl.unwrap_or("null"),
        consumer_group.unwrap_or("null"),
        topic_type
    )
}

/// Activity-log details for a schema request.
pub fn schema_activity_details(topic_name: &str, version: &str) -> String {
    format!("{topic_name}-{version}")
}
