use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{acl_request, topic};
use crate::state::AppState;

/// Routes mounted at `/acl-requests`.
///
/// ```text
/// POST   /                    create_acl_request
/// GET    /                    list_acl_requests
/// POST   /{req_no}/approve    approve_acl_request
/// POST   /{req_no}/decline    decline_acl_request
/// ```
pub fn request_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(acl_request::create_acl_request).get(acl_request::list_acl_requests),
        )
        .route("/{req_no}/approve", post(acl_request::approve_acl_request))
        .route("/{req_no}/decline", post(acl_request::decline_acl_request))
}

/// Routes mounted at `/acls`.
///
/// ```text
/// GET    /    list_acls
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(topic::list_acls))
}
