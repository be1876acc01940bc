//! Repository for the `schema_requests` table.

use kafkamgt_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use kafkamgt_core::requests::{
    activity_type_for, schema_activity_details, RequestStatus, ACTIVITY_SCHEMA_REQUEST,
};
use sqlx::{PgConnection, PgPool};

use crate::models::activity::CreateActivityLog;
use crate::models::decision::RequestFilter;
use crate::models::schema::{CreateSchemaRequest, SchemaRequest};
use crate::models::user::UserInfo;
use crate::repositories::ActivityLogRepo;

/// Column list for schema_requests queries.
const COLUMNS: &str = "id, topic_name, env, team_name, app_name, requestor, request_time, \
    schema_full, remarks, topic_status, version_schema, approver, exec_time, decline_reason";

/// Identifies the schema requests an approval or decline applies to.
#[derive(Debug, Clone, Copy)]
pub struct SchemaKey<'a> {
    pub topic_name: &'a str,
    pub version_schema: &'a str,
    pub env: &'a str,
}

/// Provides operations on schema requests.
pub struct SchemaRequestRepo;

impl SchemaRequestRepo {
    /// Submit a schema request on behalf of `requestor`, owned by the
    /// requestor's team.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSchemaRequest,
        requestor: &UserInfo,
    ) -> Result<SchemaRequest, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO schema_requests
                (topic_name, env, team_name, app_name, requestor, schema_full, remarks,
                 topic_status, version_schema)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let request = sqlx::query_as::<_, SchemaRequest>(&query)
            .bind(&input.topic_name)
            .bind(&input.env)
            .bind(&requestor.team)
            .bind(&input.app_name)
            .bind(&requestor.user_id)
            .bind(&input.schema_full)
            .bind(&input.remarks)
            .bind(RequestStatus::Created.as_str())
            .bind(&input.version_schema)
            .fetch_one(&mut *tx)
            .await?;

        log_activity(&mut tx, &request, RequestStatus::Created, &requestor.user_id).await?;

        tx.commit().await?;

        tracing::info!(
            id = request.id,
            topic = %request.topic_name,
            version = %request.version_schema,
            env = %request.env,
            "Schema request created"
        );
        Ok(request)
    }

    /// Approve the pending requests matching `key`. Returns the approved rows.
    pub async fn approve(
        pool: &PgPool,
        key: SchemaKey<'_>,
        approver: &str,
    ) -> Result<Vec<SchemaRequest>, sqlx::Error> {
        Self::decide(pool, key, approver, RequestStatus::Approved, None).await
    }

    /// Decline the pending requests matching `key`. Returns the declined rows.
    pub async fn decline(
        pool: &PgPool,
        key: SchemaKey<'_>,
        approver: &str,
        reason: &str,
    ) -> Result<Vec<SchemaRequest>, sqlx::Error> {
        Self::decide(pool, key, approver, RequestStatus::Declined, Some(reason)).await
    }

    async fn decide(
        pool: &PgPool,
        key: SchemaKey<'_>,
        approver: &str,
        status: RequestStatus,
        decline_reason: Option<&str>,
    ) -> Result<Vec<SchemaRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE schema_requests
             SET topic_status = $1, approver = $2, exec_time = NOW(), decline_reason = $3
             WHERE topic_name = $4 AND version_schema = $5 AND env = $6 AND topic_status = $7
             RETURNING {COLUMNS}"
        );
        let rows = sqlx::query_as::<_, SchemaRequest>(&query)
            .bind(status.as_str())
            .bind(approver)
            .bind(decline_reason)
            .bind(key.topic_name)
            .bind(key.version_schema)
            .bind(key.env)
            .bind(RequestStatus::Created.as_str())
            .fetch_all(&mut *tx)
            .await?;

        for request in &rows {
            log_activity(&mut tx, request, status, approver).await?;
        }

        tx.commit().await?;

        if !rows.is_empty() {
            tracing::info!(
                topic = %key.topic_name,
                version = %key.version_schema,
                env = %key.env,
                status = %status,
                approver = %approver,
                "Schema request decided"
            );
        }
        Ok(rows)
    }

    /// Page of requests newest first, narrowed by any of status, environment,
    /// owning team and topic-name substring.
    pub async fn list(
        pool: &PgPool,
        filter: &RequestFilter,
    ) -> Result<Vec<SchemaRequest>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(filter.offset);

        let query = format!(
            "SELECT {COLUMNS} FROM schema_requests
             WHERE ($1::TEXT IS NULL OR topic_status = $1)
               AND ($2::TEXT IS NULL OR env = $2)
               AND ($3::TEXT IS NULL OR team_name = $3)
               AND ($4::TEXT IS NULL OR topic_name ILIKE '%' || $4 || '%')
             ORDER BY request_time DESC, id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, SchemaRequest>(&query)
            .bind(filter.status.map(RequestStatus::as_str))
            .bind(&filter.env)
            .bind(&filter.team)
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}

async fn log_activity(
    conn: &mut PgConnection,
    request: &SchemaRequest,
    status: RequestStatus,
    user_id: &str,
) -> Result<(), sqlx::Error> {
    ActivityLogRepo::create(
        &mut *conn,
        &CreateActivityLog {
            activity_name: ACTIVITY_SCHEMA_REQUEST,
            activity_type: activity_type_for(status),
            details: schema_activity_details(&request.topic_name, &request.version_schema),
            user_id: user_id.to_string(),
            env: request.env.clone(),
            team: request.team_name.clone(),
        },
    )
    .await?;
    Ok(())
}
