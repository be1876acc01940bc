use axum::routing::{post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /login       login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}

/// Caller-scoped account routes.
///
/// ```text
/// PUT    /user/password    change_password
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/user/password", put(auth::change_password))
}
