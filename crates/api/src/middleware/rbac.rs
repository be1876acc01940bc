//! Role checks layered on [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kafkamgt_core::error::CoreError;
use kafkamgt_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated caller holding the `admin` role.
///
/// Guards approve/decline and the `/admin` routes. A missing or bad token is
/// still a 401; a valid token without the role is a 403.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let caller = AuthUser::from_request_parts(parts, state).await?;
        if caller.role == ROLE_ADMIN {
            return Ok(Self(caller));
        }

        tracing::warn!(
            user_id = %caller.user_id,
            role = %caller.role,
            path = %parts.uri.path(),
            "Admin-only route refused"
        );
        Err(AppError::Core(CoreError::Forbidden(format!(
            "{} may not approve, decline or administer",
            caller.user_id
        ))))
    }
}
