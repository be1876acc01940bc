//! Handlers for `/topic-requests`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kafkamgt_core::error::CoreError;
use kafkamgt_core::validation::{
    validate_partitions, validate_replication_factor, validate_topic_name,
};
use kafkamgt_db::models::decision::{DeclineRequest, RequestFilter};
use kafkamgt_db::models::topic::CreateTopicRequest;
use kafkamgt_db::repositories::{TopicRepo, TopicRequestRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_env_exists, load_user, require_reason};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ActionResult, DataResponse};
use crate::state::AppState;

/// POST /api/v1/topic-requests
///
/// Submit a topic request for the caller's team. Rejected with 409 if the
/// topic already exists in the environment or a request for it is pending.
pub async fn create_topic_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTopicRequest>,
) -> AppResult<impl IntoResponse> {
    validate_topic_name(&input.topic_name).map_err(CoreError::Validation)?;
    validate_partitions(input.partitions).map_err(CoreError::Validation)?;
    validate_replication_factor(input.replication_factor).map_err(CoreError::Validation)?;
    ensure_env_exists(&state.pool, &input.env).await?;

    if TopicRepo::find(&state.pool, &input.topic_name, &input.env)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Topic {} already exists in {}",
            input.topic_name, input.env
        ))));
    }
    if TopicRequestRepo::has_pending(&state.pool, &input.topic_name, &input.env).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A request for topic {} in {} is already pending",
            input.topic_name, input.env
        ))));
    }

    let requestor = load_user(&state.pool, &auth.user_id).await?;
    let request = TopicRequestRepo::create(&state.pool, &input, &requestor).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/topic-requests?status=&env=&team=&search=&limit=&offset=
pub async fn list_topic_requests(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> AppResult<impl IntoResponse> {
    let requests = TopicRequestRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// POST /api/v1/topic-requests/{env}/{topic_name}/approve
pub async fn approve_topic_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((env, topic_name)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let approved =
        TopicRequestRepo::approve(&state.pool, &topic_name, &env, &admin.user_id).await?;
    if approved.is_empty() {
        return Err(no_pending(&topic_name, &env));
    }

    Ok(Json(DataResponse {
        data: ActionResult::success(format!("Topic {topic_name} approved in {env}")),
    }))
}

/// POST /api/v1/topic-requests/{env}/{topic_name}/decline
pub async fn decline_topic_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((env, topic_name)): Path<(String, String)>,
    Json(input): Json<DeclineRequest>,
) -> AppResult<impl IntoResponse> {
    require_reason(&input.reason)?;

    let declined = TopicRequestRepo::decline(
        &state.pool,
        &topic_name,
        &env,
        &admin.user_id,
        &input.reason,
    )
    .await?;
    if declined.is_empty() {
        return Err(no_pending(&topic_name, &env));
    }

    Ok(Json(DataResponse {
        data: ActionResult::success(format!("Topic {topic_name} declined in {env}")),
    }))
}

fn no_pending(topic_name: &str, env: &str) -> AppError {
    AppError::Core(CoreError::not_found(
        "Pending topic request",
        format!("{topic_name} in {env}"),
    ))
}
