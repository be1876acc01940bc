//! Start-up creation of the first admin account.

use kafkamgt_core::roles::ROLE_ADMIN;
use kafkamgt_db::models::team::CreateTeam;
use kafkamgt_db::models::user::CreateUser;
use kafkamgt_db::repositories::{TeamRepo, UserRepo};
use kafkamgt_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Team the bootstrap admin belongs to.
pub const ADMIN_TEAM: &str = "ADMINS";

/// Create the configured admin (and its team) unless the user already exists.
///
/// Returns `true` when a user was created.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserRepo::find_by_user_id(pool, &admin.username)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    if TeamRepo::find_by_name(pool, ADMIN_TEAM).await?.is_none() {
        TeamRepo::create(
            pool,
            &CreateTeam {
                team_name: ADMIN_TEAM.to_string(),
                team_mail: None,
                app: None,
                team_phone: None,
                contact_person: None,
            },
        )
        .await?;
    }

    let pwd_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    UserRepo::create(
        pool,
        &CreateUser {
            user_id: admin.username.clone(),
            full_name: "Administrator".to_string(),
            password: String::new(),
            team: ADMIN_TEAM.to_string(),
            role: ROLE_ADMIN.to_string(),
        },
        &pwd_hash,
    )
    .await?;

    tracing::info!(user_id = %admin.username, "Bootstrap admin created");
    Ok(true)
}
