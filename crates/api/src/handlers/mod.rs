pub mod activity;
pub mod acl_request;
pub mod admin;
pub mod auth;
pub mod schema_request;
pub mod topic;
pub mod topic_request;

use kafkamgt_core::error::CoreError;
use kafkamgt_db::models::env::Env;
use kafkamgt_db::models::user::UserInfo;
use kafkamgt_db::repositories::{EnvRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Load the full user row for an authenticated login name.
///
/// A valid token for a user that has since been removed is treated as
/// unauthorized.
pub(crate) async fn load_user(pool: &PgPool, user_id: &str) -> AppResult<UserInfo> {
    UserRepo::find_by_user_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(format!("Unknown user {user_id}"))))
}

/// Ensure an environment is registered, returning its row.
pub(crate) async fn ensure_env_exists(pool: &PgPool, name: &str) -> AppResult<Env> {
    EnvRepo::find_by_name(pool, name)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation(format!("Unknown environment {name}"))))
}

/// Reject blank decline reasons.
pub(crate) fn require_reason(reason: &str) -> AppResult<()> {
    if reason.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "A decline reason is required".into(),
        )));
    }
    Ok(())
}
