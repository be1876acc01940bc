//! Handlers for `/auth/login` and `/user/password`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kafkamgt_core::error::CoreError;
use kafkamgt_db::models::user::ChangePassword;
use kafkamgt_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_new_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::load_user;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: LoginUser,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub user_id: String,
    pub full_name: String,
    pub team: String,
    pub role: String,
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let user = UserRepo::find_by_user_id(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.pwd)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = %input.username, "Failed login attempt");
        return Err(invalid());
    }

    let access_token = generate_access_token(&user.user_id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.user_id, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: LoginUser {
            user_id: user.user_id,
            full_name: user.full_name,
            team: user.team,
            role: user.role,
        },
    }))
}

/// PUT /api/v1/user/password
///
/// Change the caller's own password after re-checking the current one.
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePassword>,
) -> AppResult<StatusCode> {
    let user = load_user(&state.pool, &auth.user_id).await?;

    let current_valid = verify_password(&input.current_password, &user.pwd)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_new_password(&input.new_password, &user.user_id).map_err(CoreError::Validation)?;

    let pwd_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    if !UserRepo::update_password(&state.pool, &user.user_id, &pwd_hash).await? {
        return Err(AppError::Core(CoreError::not_found("User", &user.user_id)));
    }

    tracing::info!(user_id = %user.user_id, "Password changed");
    Ok(StatusCode::NO_CONTENT)
}
