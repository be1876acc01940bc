//! Activity log model.

use kafkamgt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `activity_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityLog {
    pub id: DbId,
    pub req_no: String,
    pub activity_name: String,
    pub activity_type: String,
    pub activity_time: Timestamp,
    pub details: String,
    pub user_id: String,
    pub env: String,
    pub team: String,
}

/// DTO for appending to the activity log. `req_no` is generated on insert.
#[derive(Debug, Clone)]
pub struct CreateActivityLog {
    pub activity_name: &'static str,
    pub activity_type: &'static str,
    pub details: String,
    pub user_id: String,
    pub env: String,
    pub team: String,
}

/// Query parameters for `GET /activity-log`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityLogQuery {
    pub env: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
