//! Handlers for `/acl-requests`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kafkamgt_core::error::CoreError;
use kafkamgt_core::validation::validate_acl_principal;
use kafkamgt_db::models::acl::CreateAclRequest;
use kafkamgt_db::models::decision::{DeclineRequest, RequestFilter};
use kafkamgt_db::repositories::{AclRequestRepo, TopicRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_env_exists, load_user, require_reason};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ActionResult, DataResponse};
use crate::state::AppState;

/// POST /api/v1/acl-requests
///
/// Submit an ACL request for an existing topic. `team_name` must name the
/// topic's owner; the caller's team becomes the requesting team.
pub async fn create_acl_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAclRequest>,
) -> AppResult<impl IntoResponse> {
    validate_acl_principal(
        input.topic_type,
        input.acl_ip.as_deref(),
        input.acl_ssl.as_deref(),
        input.consumer_group.as_deref(),
    )
    .map_err(CoreError::Validation)?;
    ensure_env_exists(&state.pool, &input.env).await?;

    let topic = TopicRepo::find(&state.pool, &input.topic_name, &input.env)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found(
                "Topic",
                format!("{} in {}", input.topic_name, input.env),
            ))
        })?;
    if topic.team_name != input.team_name {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Topic {} in {} is owned by {}, not {}",
            topic.topic_name, topic.env, topic.team_name, input.team_name
        ))));
    }

    let requestor = load_user(&state.pool, &auth.user_id).await?;
    let request = AclRequestRepo::create(&state.pool, &input, &requestor).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/acl-requests?status=&env=&team=&search=&limit=&offset=
pub async fn list_acl_requests(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> AppResult<impl IntoResponse> {
    let requests = AclRequestRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// POST /api/v1/acl-requests/{req_no}/approve
pub async fn approve_acl_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(req_no): Path<String>,
) -> AppResult<impl IntoResponse> {
    AclRequestRepo::approve(&state.pool, &req_no, &admin.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Pending ACL request", &req_no)))?;

    Ok(Json(DataResponse {
        data: ActionResult::success(format!("ACL request {req_no} approved")),
    }))
}

/// POST /api/v1/acl-requests/{req_no}/decline
pub async fn decline_acl_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(req_no): Path<String>,
    Json(input): Json<DeclineRequest>,
) -> AppResult<impl IntoResponse> {
    require_reason(&input.reason)?;

    AclRequestRepo::decline(&state.pool, &req_no, &admin.user_id, &input.reason)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Pending ACL request", &req_no)))?;

    Ok(Json(DataResponse {
        data: ActionResult::success(format!("ACL request {req_no} declined")),
    }))
}
