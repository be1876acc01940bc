//! Repository for the `activity_log` table.

use kafkamgt_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use kafkamgt_core::request_id::generate_request_id;
use sqlx::{PgExecutor, PgPool};

use crate::models::activity::{ActivityLog, ActivityLogQuery, CreateActivityLog};

/// Column list for activity_log queries.
const COLUMNS: &str = "id, req_no, activity_name, activity_type, activity_time, \
    details, user_id, env, team";

/// Append-only access to the activity log.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Append one entry with a freshly generated `req_no`.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        entry: &CreateActivityLog,
    ) -> Result<ActivityLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_log
                (req_no, activity_name, activity_type, details, user_id, env, team)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(generate_request_id())
            .bind(entry.activity_name)
            .bind(entry.activity_type)
            .bind(&entry.details)
            .bind(&entry.user_id)
            .bind(&entry.env)
            .bind(&entry.team)
            .fetch_one(executor)
            .await
    }

    /// Newest-first page of entries, optionally restricted to one environment.
    pub async fn query(
        pool: &PgPool,
        params: &ActivityLogQuery,
    ) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(params.offset);

        let query = format!(
            "SELECT {COLUMNS} FROM activity_log
             WHERE ($1::TEXT IS NULL OR env = $1)
             ORDER BY activity_time DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(&params.env)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
