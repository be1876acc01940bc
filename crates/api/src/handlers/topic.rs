//! Handlers for the source-of-truth listings and topic promotion.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use kafkamgt_core::promotion::PromotionStatus;
use kafkamgt_core::validation::validate_topic_name;
use kafkamgt_db::models::decision::EnvFilter;
use kafkamgt_db::models::topic::{CreateTopicRequest, PromoteTopic};
use kafkamgt_db::repositories::topic_request_repo::PENDING_TOPIC_REQUEST;
use kafkamgt_db::repositories::{AclRepo, EnvRepo, TopicRepo, TopicRequestRepo};

use crate::error::AppResult;
use crate::handlers::load_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Partitions and replication factor used when the source environment has no
/// approved request to copy from.
const DEFAULT_PARTITIONS: i32 = 1;
const DEFAULT_REPLICATION_FACTOR: i32 = 1;

/// GET /api/v1/topics?env=
pub async fn list_topics(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<EnvFilter>,
) -> AppResult<impl IntoResponse> {
    let topics = TopicRepo::list(&state.pool, filter.env.as_deref()).await?;
    Ok(Json(DataResponse { data: topics }))
}

/// GET /api/v1/acls?env=
pub async fn list_acls(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<EnvFilter>,
) -> AppResult<impl IntoResponse> {
    let acls = AclRepo::list(&state.pool, filter.env.as_deref()).await?;
    Ok(Json(DataResponse { data: acls }))
}

/// POST /api/v1/topics/promote
///
/// Always answers 200 with a [`PromotionStatus`]; the outcome is in `status`.
/// Database failures still surface as error responses.
pub async fn promote_topic(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PromoteTopic>,
) -> AppResult<impl IntoResponse> {
    let status = evaluate_promotion(&state, &auth, &input).await?;

    tracing::info!(
        topic = %input.topic_name,
        source_env = %input.source_env,
        target_env = %input.target_env,
        status = ?status.status,
        "Topic promotion evaluated"
    );
    Ok(Json(DataResponse { data: status }))
}

async fn evaluate_promotion(
    state: &AppState,
    auth: &AuthUser,
    input: &PromoteTopic,
) -> AppResult<PromotionStatus> {
    let topic = input.topic_name.as_str();

    if let Err(msg) = validate_topic_name(topic) {
        return Ok(PromotionStatus::failure(topic, msg));
    }
    if input.source_env == input.target_env {
        return Ok(PromotionStatus::failure(
            topic,
            "Source and target environment must differ",
        ));
    }
    if EnvRepo::find_by_name(&state.pool, &input.source_env)
        .await?
        .is_none()
    {
        return Ok(PromotionStatus::failure(
            topic,
            format!("Unknown environment {}", input.source_env),
        ));
    }
    let Some(target_env) = EnvRepo::find_by_name(&state.pool, &input.target_env).await? else {
        return Ok(PromotionStatus::failure(
            topic,
            format!("Unknown environment {}", input.target_env),
        ));
    };

    let Some(source_topic) = TopicRepo::find(&state.pool, topic, &input.source_env).await? else {
        return Ok(PromotionStatus::not_promoted(
            topic,
            &input.source_env,
            format!("Topic {topic} does not exist in {}", input.source_env),
        ));
    };

    if TopicRepo::find(&state.pool, topic, &input.target_env)
        .await?
        .is_some()
        || TopicRequestRepo::has_pending(&state.pool, topic, &input.target_env).await?
    {
        return Ok(PromotionStatus::no_promotion(
            topic,
            &input.source_env,
            &input.target_env,
        ));
    }

    let template =
        TopicRequestRepo::find_latest_approved(&state.pool, topic, &input.source_env).await?;
    let (partitions, replication_factor, acl_ip, acl_ssl) = match template {
        Some(t) => (t.partitions, t.replication_factor, t.acl_ip, t.acl_ssl),
        None => (DEFAULT_PARTITIONS, DEFAULT_REPLICATION_FACTOR, None, None),
    };

    let requestor = load_user(&state.pool, &auth.user_id).await?;
    // The promoted topic keeps its owner, whoever asked for the promotion.
    let created = TopicRequestRepo::create_for_team(
        &state.pool,
        &CreateTopicRequest {
            topic_name: topic.to_string(),
            partitions,
            replication_factor,
            env: input.target_env.clone(),
            app_name: source_topic.app_name,
            acl_ip,
            acl_ssl,
            remarks: Some(format!("Promoted from {}", input.source_env)),
        },
        &requestor.user_id,
        &source_topic.team_name,
    )
    .await;

    match created {
        Ok(_) => {}
        // A concurrent promotion got its request in first.
        Err(sqlx::Error::Database(e)) if e.constraint() == Some(PENDING_TOPIC_REQUEST) => {
            return Ok(PromotionStatus::no_promotion(
                topic,
                &input.source_env,
                &input.target_env,
            ));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(PromotionStatus::success(
        topic,
        &input.source_env,
        &input.target_env,
        target_env.id,
    ))
}
