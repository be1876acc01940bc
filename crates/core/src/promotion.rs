//! Topic promotion response object.
//!
//! A promotion copies a topic from one environment into the next one. The
//! handler answers every promotion attempt with a [`PromotionStatus`], even
//! when nothing was promoted, so clients can branch on `status` alone.

use serde::{Deserialize, Serialize};

/// Outcome of a promotion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionStatusType {
    /// A topic request was created in the target environment.
    Success,
    /// The attempt could not be evaluated (unknown environment, bad input).
    Failure,
    /// The topic does not exist in the source environment.
    NotPromoted,
    /// The topic already exists in the target environment.
    NoPromotion,
}

/// Response body for `POST /topics/promote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionStatus {
    pub status: PromotionStatusType,
    pub source_env: Option<String>,
    pub target_env: Option<String>,
    pub target_env_id: Option<String>,
    pub topic_name: Option<String>,
    pub error: Option<String>,
}

impl PromotionStatus {
    fn new(status: PromotionStatusType, topic_name: &str) -> Self {
        Self {
            status,
            source_env: None,
            target_env: None,
            target_env_id: None,
            topic_name: Some(topic_name.to_string()),
            error: None,
        }
    }

    pub fn success(
        topic_name: &str,
        source_env: &str,
        target_env: &str,
        target_env_id: i64,
    ) -> Self {
        Self {
            source_env: Some(source_env.to_string()),
            target_env: Some(target_env.to_string()),
            target_env_id: Some(target_env_id.to_string()),
            ..Self::new(PromotionStatusType::Success, topic_name)
        }
    }

    pub fn failure(topic_name: &str, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(PromotionStatusType::Failure, topic_name)
        }
    }

    pub fn not_promoted(topic_name: &str, source_env: &str, error: impl Into<String>) -> Self {
        Self {
            source_env: Some(source_env.to_string()),
            error: Some(error.into()),
            ..Self::new(PromotionStatusType::NotPromoted, topic_name)
        }
    }

    pub fn no_promotion(topic_name: &str, source_env: &str, target_env: &str) -> Self {
        Self {
            source_env: Some(source_env.to_string()),
            target_env: Some(target_env.to_string()),
            ..Self::new(PromotionStatusType::NoPromotion, topic_name)
        }
    }
}
