//! Handlers for `/schema-requests`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kafkamgt_core::error::CoreError;
use kafkamgt_db::models::decision::{DeclineRequest, RequestFilter};
use kafkamgt_db::models::schema::CreateSchemaRequest;
use kafkamgt_db::repositories::{SchemaKey, SchemaRequestRepo, TopicRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_env_exists, load_user, require_reason};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ActionResult, DataResponse};
use crate::state::AppState;

/// POST /api/v1/schema-requests
///
/// A second pending request for the same topic, version and environment is
/// rejected with 409 by the pending-request index.
pub async fn create_schema_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSchemaRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_env_exists(&state.pool, &input.env).await?;

    TopicRepo::find(&state.pool, &input.topic_name, &input.env)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::not_found(
                "Topic",
                format!("{} in {}", input.topic_name, input.env),
            ))
        })?;

    let requestor = load_user(&state.pool, &auth.user_id).await?;
    let request = SchemaRequestRepo::create(&state.pool, &input, &requestor).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/schema-requests?status=&env=&team=&search=&limit=&offset=
pub async fn list_schema_requests(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> AppResult<impl IntoResponse> {
    let requests = SchemaRequestRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// POST /api/v1/schema-requests/{env}/{topic_name}/{version}/approve
pub async fn approve_schema_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((env, topic_name, version)): Path<(String, String, String)>,
) -> AppResult<impl IntoResponse> {
    let key = SchemaKey {
        topic_name: &topic_name,
        version_schema: &version,
        env: &env,
    };
    let approved = SchemaRequestRepo::approve(&state.pool, key, &admin.user_id).await?;
    if approved.is_empty() {
        return Err(no_pending(key));
    }

    Ok(Json(DataResponse {
        data: ActionResult::success(format!(
            "Schema version {version} for {topic_name} approved in {env}"
        )),
    }))
}

/// POST /api/v1/schema-requests/{env}/{topic_name}/{version}/decline
pub async fn decline_schema_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((env, topic_name, version)): Path<(String, String, String)>,
    Json(input): Json<DeclineRequest>,
) -> AppResult<impl IntoResponse> {
    require_reason(&input.reason)?;

    let key = SchemaKey {
        topic_name: &topic_name,
        version_schema: &version,
        env: &env,
    };
    let declined =
        SchemaRequestRepo::decline(&state.pool, key, &admin.user_id, &input.reason).await?;
    if declined.is_empty() {
        return Err(no_pending(key));
    }

    Ok(Json(DataResponse {
        data: ActionResult::success(format!(
            "Schema version {version} for {topic_name} declined in {env}"
        )),
    }))
}

fn no_pending(key: SchemaKey<'_>) -> AppError {
    AppError::Core(CoreError::not_found(
        "Pending schema request",
        format!("{} v{} in {}", key.topic_name, key.version_schema, key.env),
    ))
}
