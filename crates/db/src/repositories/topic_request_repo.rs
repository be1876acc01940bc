//! Repository for the `topic_requests` table.
//!
//! Submitting writes the request and its activity-log entry. Approving also
//! records the topic and its producer ACL in the source-of-truth tables.

use kafkamgt_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use kafkamgt_core::requests::{
    activity_type_for, RequestStatus, TopicType, ACTIVITY_TOPIC_REQUEST,
};
use sqlx::{PgConnection, PgPool};

use crate::models::acl::CreateAcl;
use crate::models::activity::CreateActivityLog;
use crate::models::decision::RequestFilter;
use crate::models::topic::{CreateTopic, CreateTopicRequest, TopicRequest};
use crate::models::user::UserInfo;
use crate::repositories::{AclRepo, ActivityLogRepo, TopicRepo};

/// Column list for topic_requests queries.
const COLUMNS: &str = "id, topic_name, partitions, replication_factor, env, team_name, \
    app_name, topic_type, requestor, request_time, acl_ip, acl_ssl, remarks, \
    topic_status, approver, exec_time, decline_reason";

/// Partial unique index allowing one pending request per topic and env.
pub const PENDING_TOPIC_REQUEST: &str = "uq_topic_requests_pending";

/// Provides operations on topic requests.
pub struct TopicRequestRepo;

impl TopicRequestRepo {
    /// Submit a topic request on behalf of `requestor`, owned by the
    /// requestor's team.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTopicRequest,
        requestor: &UserInfo,
    ) -> Result<TopicRequest, sqlx::Error> {
        Self::create_for_team(pool, input, &requestor.user_id, &requestor.team).await
    }

    /// Submit a topic request owned by `team_name`, which need not be the
    /// requestor's team. Promotions use this to keep the source owner.
    pub async fn create_for_team(
        pool: &PgPool,
        input: &CreateTopicRequest,
        requestor: &str,
        team_name: &str,
    ) -> Result<TopicRequest, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO topic_requests
                (topic_name, partitions, replication_factor, env, team_name, app_name,
                 topic_type, requestor, acl_ip, acl_ssl, remarks, topic_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        let request = sqlx::query_as::<_, TopicRequest>(&query)
            .bind(&input.topic_name)
            .bind(input.partitions)
            .bind(input.replication_factor)
            .bind(&input.env)
            .bind(team_name)
            .bind(&input.app_name)
            .bind(TopicType::Producer.as_str())
            .bind(requestor)
            .bind(&input.acl_ip)
            .bind(&input.acl_ssl)
            .bind(&input.remarks)
            .bind(RequestStatus::Created.as_str())
            .fetch_one(&mut *tx)
            .await?;

        log_activity(&mut tx, &request, RequestStatus::Created, requestor).await?;

        tx.commit().await?;

        tracing::info!(
            id = request.id,
            topic = %request.topic_name,
            env = %request.env,
            requestor = %request.requestor,
            "Topic request created"
        );
        Ok(request)
    }

    /// Approve the pending requests for `topic_name` in `env`.
    ///
    /// Records the topic and, when the request names a principal, a producer
    /// ACL for the owning team. Returns the approved rows; an empty vector
    /// means nothing was pending.
    pub async fn approve(
        pool: &PgPool,
        topic_name: &str,
        env: &str,
        approver: &str,
    ) -> Result<Vec<TopicRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let approved = set_status(
            &mut tx,
            topic_name,
            env,
            approver,
            RequestStatus::Approved,
            None,
        )
        .await?;

        for request in &approved {
            TopicRepo::insert_many(
                &mut tx,
                &[CreateTopic {
                    topic_name: request.topic_name.clone(),
                    env: request.env.clone(),
                    team_name: request.team_name.clone(),
                    app_name: request.app_name.clone(),
                }],
            )
            .await?;

            if request.acl_ip.is_some() || request.acl_ssl.is_some() {
                AclRepo::insert_many(
                    &mut tx,
                    &[CreateAcl {
                        topic_name: request.topic_name.clone(),
                        env: request.env.clone(),
                        team_name: request.team_name.clone(),
                        consumer_group: None,
                        topic_type: TopicType::Producer,
                        acl_ip: request.acl_ip.clone(),
                        acl_ssl: request.acl_ssl.clone(),
                    }],
                )
                .await?;
            }

            log_activity(&mut tx, request, RequestStatus::Approved, approver).await?;
        }

        tx.commit().await?;

        if !approved.is_empty() {
            tracing::info!(
                topic = %topic_name,
                env = %env,
                approver = %approver,
                "Topic request approved"
            );
        }
        Ok(approved)
    }

    /// Decline the pending requests for `topic_name` in `env`.
    pub async fn decline(
        pool: &PgPool,
        topic_name: &str,
        env: &str,
        approver: &str,
        reason: &str,
    ) -> Result<Vec<TopicRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let declined = set_status(
            &mut tx,
            topic_name,
            env,
            approver,
            RequestStatus::Declined,
            Some(reason),
        )
        .await?;

        for request in &declined {
            log_activity(&mut tx, request, RequestStatus::Declined, approver).await?;
        }

        tx.commit().await?;

        if !declined.is_empty() {
            tracing::info!(
                topic = %topic_name,
                env = %env,
                approver = %approver,
                "Topic request declined"
            );
        }
        Ok(declined)
    }

    /// Page of requests newest first, narrowed by any of status, environment,
    /// owning team and topic-name substring.
    pub async fn list(
        pool: &PgPool,
        filter: &RequestFilter,
    ) -> Result<Vec<TopicRequest>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(filter.offset);

        let query = format!(
            "SELECT {COLUMNS} FROM topic_requests
             WHERE ($1::TEXT IS NULL OR topic_status = $1)
               AND ($2::TEXT IS NULL OR env = $2)
               AND ($3::TEXT IS NULL OR team_name = $3)
               AND ($4::TEXT IS NULL OR topic_name ILIKE '%' || $4 || '%')
             ORDER BY request_time DESC, id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, TopicRequest>(&query)
            .bind(filter.status.map(RequestStatus::as_str))
            .bind(&filter.env)
            .bind(&filter.team)
            .bind(&filter.search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Whether a request for `topic_name` in `env` is still awaiting a decision.
    pub async fn has_pending(
        pool: &PgPool,
        topic_name: &str,
        env: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM topic_requests
                WHERE topic_name = $1 AND env = $2 AND topic_status = $3
             )",
        )
        .bind(topic_name)
        .bind(env)
        .bind(RequestStatus::Created.as_str())
        .fetch_one(pool)
        .await
    }

    /// The most recently approved request for `topic_name` in `env`.
    pub async fn find_latest_approved(
        pool: &PgPool,
        topic_name: &str,
        env: &str,
    ) -> Result<Option<TopicRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topic_requests
             WHERE topic_name = $1 AND env = $2 AND topic_status = $3
             ORDER BY exec_time DESC NULLS LAST, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, TopicRequest>(&query)
            .bind(topic_name)
            .bind(env)
            .bind(RequestStatus::Approved.as_str())
            .fetch_optional(pool)
            .await
    }
}

/// Move pending requests for a topic/env to `status`, stamping approver and
/// execution time.
async fn set_status(
    conn: &mut PgConnection,
    topic_name: &str,
    env: &str,
    approver: &str,
    status: RequestStatus,
    decline_reason: Option<&str>,
) -> Result<Vec<TopicRequest>, sqlx::Error> {
    let query = format!(
        "UPDATE topic_requests
         SET topic_status = $1, approver = $2, exec_time = NOW(), decline_reason = $3
         WHERE topic_name = $4 AND env = $5 AND topic_status = $6
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, TopicRequest>(&query)
        .bind(status.as_str())
        .bind(approver)
        .bind(decline_reason)
        .bind(topic_name)
        .bind(env)
        .bind(RequestStatus::Created.as_str())
        .fetch_all(&mut *conn)
        .await
}

async fn log_activity(
    conn: &mut PgConnection,
    request: &TopicRequest,
    status: RequestStatus,
    user_id: &str,
) -> Result<(), sqlx::Error> {
    ActivityLogRepo::create(
        &mut *conn,
        &CreateActivityLog {
            activity_name: ACTIVITY_TOPIC_REQUEST,
            activity_type: activity_type_for(status),
            details: request.topic_name.clone(),
            user_id: user_id.to_string(),
            env: request.env.clone(),
            team: request.team_name.clone(),
        },
    )
    .await?;
    Ok(())
}
