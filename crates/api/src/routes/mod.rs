pub mod acl;
pub mod admin;
pub mod auth;
pub mod health;
pub mod schema;
pub mod topic;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                        login (public)
/// /user/password                                     change own password (PUT)
///
/// /topic-requests                                    submit, list
/// /topic-requests/{env}/{topic_name}/approve         approve (admin)
/// /topic-requests/{env}/{topic_name}/decline         decline (admin)
///
/// /acl-requests                                      submit, list
/// /acl-requests/{req_no}/approve                     approve (admin)
/// /acl-requests/{req_no}/decline                     decline (admin)
///
/// /schema-requests                                   submit, list
/// /schema-requests/{env}/{topic_name}/{version}/approve   approve (admin)
/// /schema-requests/{env}/{topic_name}/{version}/decline   decline (admin)
///
/// /topics                                            source-of-truth topics
/// /topics/promote                                    promote a topic (POST)
/// /acls                                              source-of-truth ACLs
/// /activity-log                                      activity log page
///
/// /admin/users                                       list, create (admin)
/// /admin/teams                                       list, create (admin)
/// /admin/envs                                        list, register (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(auth::user_router())
        .nest("/topic-requests", topic::request_router())
        .nest("/topics", topic::router())
        .nest("/acl-requests", acl::request_router())
        .nest("/acls", acl::router())
        .nest("/schema-requests", schema::router())
        .route("/activity-log", get(handlers::activity::list_activity))
        .nest("/admin", admin::router())
}
