//! Repository for the `acl_requests` table.

use kafkamgt_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use kafkamgt_core::request_id::generate_request_id;
use kafkamgt_core::requests::{
    acl_activity_details, activity_type_for, RequestStatus, TopicType, ACTIVITY_ACL,
};
use sqlx::{PgConnection, PgPool};

use crate::models::acl::{AclRequest, CreateAcl, CreateAclRequest};
use crate::models::activity::CreateActivityLog;
use crate::models::decision::RequestFilter;
use crate::models::user::UserInfo;
use crate::repositories::{AclRepo, ActivityLogRepo};

/// Column list for acl_requests queries.
const COLUMNS: &str = "id, req_no, topic_name, env, team_name, app_name, topic_type, \
    requestor, request_time, acl_ip, acl_ssl, remarks, topic_status, consumer_group, \
    requesting_team, approver, exec_time, decline_reason";

/// Provides operations on ACL requests.
pub struct AclRequestRepo;

impl AclRequestRepo {
    /// Submit an ACL request under a new `req_no`. The requesting team is the
    /// requestor's team.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAclRequest,
        requestor: &UserInfo,
    ) -> Result<AclRequest, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO acl_requests
                (req_no, topic_name, env, team_name, app_name, topic_type, requestor,
                 acl_ip, acl_ssl, remarks, topic_status, consumer_group, requesting_team)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        let request = sqlx::query_as::<_, AclRequest>(&query)
            .bind(generate_request_id())
            .bind(&input.topic_name)
            .bind(&input.env)
            .bind(&input.team_name)
            .bind(&input.app_name)
            .bind(input.topic_type.as_str())
            .bind(&requestor.user_id)
            .bind(&input.acl_ip)
            .bind(&input.acl_ssl)
            .bind(&input.remarks)
            .bind(RequestStatus::Created.as_str())
            .bind(&input.consumer_group)
            .bind(&requestor.team)
            .fetch_one(&mut *tx)
            .await?;

        log_activity(&mut tx, &request, RequestStatus::Created, &requestor.user_id).await?;

        tx.commit().await?;

        tracing::info!(
            req_no = %request.req_no,
            topic = %request.topic_name,
            env = %request.env,
            topic_type = %request.topic_type,
            "ACL request created"
        );
        Ok(request)
    }

    /// Approve a pending request and record its ACL in the source of truth.
    ///
    /// Returns `None` if no pending request has this `req_no`.
    pub async fn approve(
        pool: &PgPool,
        req_no: &str,
        approver: &str,
    ) -> Result<Option<AclRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(request) =
            set_status(&mut tx, req_no, approver, RequestStatus::Approved, None).await?
        else {
            return Ok(None);
        };

        let topic_type = request
            .topic_type
            .parse::<TopicType>()
            .map_err(|e| sqlx::Error::Decode(e.into()))?;

        AclRepo::insert_many(
            &mut tx,
            &[CreateAcl {
                topic_name: request.topic_name.clone(),
                env: request.env.clone(),
                team_name: request.requesting_team.clone(),
                consumer_group: request.consumer_group.clone(),
                topic_type,
                acl_ip: request.acl_ip.clone(),
                acl_ssl: request.acl_ssl.clone(),
            }],
        )
        .await?;

        log_activity(&mut tx, &request, RequestStatus::Approved, approver).await?;

        tx.commit().await?;

        tracing::info!(req_no = %req_no, approver = %approver, "ACL request approved");
        Ok(Some(request))
    }

    /// Decline a pending request. Returns `None` if nothing was pending.
    pub async fn decline(
        pool: &PgPool,
        req_no: &str,
        approver: &str,
        reason: &str,
    ) -> Result<Option<AclRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(request) = set_status(
            &mut tx,
            req_no,
            approver,
            RequestStatus::Declined,
            Some(reason),
        )
        .await?
        else {
            return Ok(None);
        };

        log_activity(&mut tx, &request, RequestStatus::Declined, approver).await?;

        tx.commit().await?;

        tracing::info!(req_no = %req_no, approver = %approver, "ACL request declined");
        Ok(Some(request))
    }

    /// Page of requests newest first, narrowed by any of status, environment,
    /// owning team and topic-name substring.
    pub async fn list(
        pool: &PgPool,
        filter: &RequestFilter,
    ) -> Result<Vec<AclRequest>, sqlx::Error> {
        let limit = clamp_limit(filter.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
        let offset = clamp_offset(filter.offset);

        let query = format!(
            "SELECT {COLUMNS} FROM acl_requests
             WHERE ($1::TEXT IS NULL OR topic_status = $1)
               AND ($2::TEXT IS NULL OR env = $2)
               AND ($3::TEXT IS NULL OR team_name = $3)
               AND ($4::TEXT IS NULL OR topic_name ILIKE '%' || $4 || '%')
             ORDER BY request_time DESC, id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, AclRequest>(&query)
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

async fn set_status(
    conn: &mut PgConnection,
    req_no: &str,
    approver: &str,
    status: RequestStatus,
    decline_reason: Option<&str>,
) -> Result<Option<AclRequest>, sqlx::Error> {
    let query = format!(
        "UPDATE acl_requests
         SET topic_status = $1, approver = $2, exec_time = NOW(), decline_reason = $3
         WHERE req_no = $4 AND topic_status = $5
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, AclRequest>(&query)
        .bind(status.as_str())
        .bind(approver)
        .bind(decline_reason)
        .bind(req_no)
        .bind(RequestStatus::Created.as_str())
        .fetch_optional(&mut *conn)
        .await
}

async fn log_activity(
    conn: &mut PgConnection,
    request: &AclRequest,
    status: RequestStatus,
    user_id: &str,
) -> Result<(), sqlx::Error> {
    let topic_type = request
        .topic_type
        .parse::<TopicType>()
        .map_err(|e| sqlx::Error::Decode(e.into()))?;

    ActivityLogRepo::create(
        &mut *conn,
        &CreateActivityLog {
            activity_name: ACTIVITY_ACL,
            activity_type: activity_type_for(status),
            details: acl_activity_details(
                request.acl_ip.as_deref(),
                &request.topic_name,
                request.acl_ssl.as_deref(),
                request.consumer_group.as_deref(),
                topic_type,
            ),
            user_id: user_id.to_string(),
            env: request.env.clone(),
            team: request.requesting_team.clone(),
        },
    )
    .await?;
    Ok(())
}
