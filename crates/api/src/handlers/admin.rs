//! Admin handlers for users, teams and environments.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kafkamgt_core::error::CoreError;
use kafkamgt_core::roles::validate_role;
use kafkamgt_db::models::env::CreateEnv;
use kafkamgt_db::models::team::CreateTeam;
use kafkamgt_db::models::user::CreateUser;
use kafkamgt_db::repositories::{EnvRepo, TeamRepo, UserRepo};
use validator::Validate;

use crate::auth::password::{hash_password, validate_new_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/users
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_role(&input.role).map_err(CoreError::Validation)?;
    validate_new_password(&input.password, &input.user_id).map_err(CoreError::Validation)?;

    let pwd_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    let user = UserRepo::create(&state.pool, &input, &pwd_hash).await?;

    tracing::info!(
        user_id = %user.user_id,
        team = %user.team,
        created_by = %admin.user_id,
        "User created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/admin/users
pub async fn list_users(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/admin/teams
pub async fn create_team(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTeam>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let team = TeamRepo::create(&state.pool, &input).await?;

    tracing::info!(team = %team.team_name, created_by = %admin.user_id, "Team created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: team })))
}

/// GET /api/v1/admin/teams
pub async fn list_teams(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: teams }))
}

/// POST /api/v1/admin/envs
pub async fn create_env(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEnv>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let env = EnvRepo::create(&state.pool, &input).await?;

    tracing::info!(
        env = %env.name,
        host = %env.host,
        port = env.port,
        created_by = %admin.user_id,
        "Environment registered"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: env })))
}

/// GET /api/v1/admin/envs
pub async fn list_envs(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let envs = EnvRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: envs }))
}
