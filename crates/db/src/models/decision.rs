//! Shared bodies and filters for approving, declining and listing requests.

use kafkamgt_core::requests::RequestStatus;
use serde::Deserialize;

/// Request body for the decline endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclineRequest {
    pub reason: String,
}

/// Query parameters for request list endpoints
/// (`?status=&env=&team=&search=&limit=&offset=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub env: Option<String>,
    /// Owning team, matched exactly.
    pub team: Option<String>,
    /// Case-insensitive substring of the topic name.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameter for source-of-truth list endpoints (`?env=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvFilter {
    pub env: Option<String>,
}
