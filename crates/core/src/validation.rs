//! Input validation for topic, ACL and schema requests.
//!
//! Functions return `Err(String)` with a human-readable message; the API
//! layer wraps it in `CoreError::Validation`.

use std::sync::LazyLock;

use regex::Regex;

use crate::requests::TopicType;

/// Kafka rejects topic names longer than this.
pub const MAX_TOPIC_NAME_LEN: usize = 249;

pub const MIN_PARTITIONS: i32 = 1;
pub const MAX_PARTITIONS: i32 = 1000;

pub const MIN_REPLICATION_FACTOR: i32 = 1;
pub const MAX_REPLICATION_FACTOR: i32 = 10;

static TOPIC_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("static regex is valid"));

/// Validate a Kafka topic name.
pub fn validate_topic_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Topic name must not be empty".to_string());
    }
    if name.len() > MAX_TOPIC_NAME_LEN {
        return Err(format!(
            "Topic name must be at most {MAX_TOPIC_NAME_LEN} characters"
        ));
    }
    if name == "." || name == ".." {
        return Err(format!("Topic name '{name}' is reserved"));
    }
    if !TOPIC_NAME_RE.is_match(name) {
        return Err(format!(
            "Topic name '{name}' may only contain letters, digits, '.', '_' and '-'"
        ));
    }
    Ok(())
}

pub fn validate_partitions(partitions: i32) -> Result<(), String> {
    if !(MIN_PARTITIONS..=MAX_PARTITIONS).contains(&partitions) {
        return Err(format!(
            "Partitions must be between {MIN_PARTITIONS} and {MAX_PARTITIONS}, got {partitions}"
        ));
    }
    Ok(())
}

pub fn validate_replication_factor(factor: i32) -> Result<(), String> {
    if !(MIN_REPLICATION_FACTOR..=MAX_REPLICATION_FACTOR).contains(&factor) {
        return Err(format!(
            "Replication factor must be between {MIN_REPLICATION_FACTOR} and \
             {MAX_REPLICATION_FACTOR}, got {factor}"
        ));
    }
    Ok(())
}

/// An ACL must name its principal by IP, SSL subject, or both. Consumer ACLs
/// also need the consumer group they read as.
pub fn validate_acl_principal(
    topic_type: TopicType,
    acl_ip: Option<&str>,
    acl_ssl: Option<&str>,
    consumer_group: Option<&str>,
) -> Result<(), String> {
    let present = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());

    if !present(acl_ip) && !present(acl_ssl) {
        return Err("ACL request needs an IP address or an SSL subject".to_string());
    }
    if topic_type == TopicType::Consumer && !present(consumer_group) {
        return Err("Consumer ACL request needs a consumer group".to_string());
    }
    Ok(())
}
