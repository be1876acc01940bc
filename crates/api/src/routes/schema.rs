use axum::routing::post;
use axum::Router;

use crate::handlers::schema_request;
use crate::state::AppState;

/// Routes mounted at `/schema-requests`.
///
/// ```text
/// POST   /                                   create_schema_request
/// GET    /                                   list_schema_requests
/// POST   /{env}/{topic_name}/{version}/approve   approve_schema_request
/// POST   /{env}/{topic_name}/{version}/decline   decline_schema_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(schema_request::create_schema_request).get(schema_request::list_schema_requests),
        )
        .route(
            "/{env}/{topic_name}/{version}/approve",
            post(schema_request::approve_schema_request),
        )
        .route(
            "/{env}/{topic_name}/{version}/decline",
            post(schema_request::decline_schema_request),
        )
}
