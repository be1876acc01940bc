use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires the admin role.
///
/// ```text
/// GET, POST   /users    list_users, create_user
/// GET, POST   /teams    list_teams, create_team
/// GET, POST   /envs     list_envs, create_env
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route("/teams", get(admin::list_teams).post(admin::create_team))
        .route("/envs", get(admin::list_envs).post(admin::create_env))
}
