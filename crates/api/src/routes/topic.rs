use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{topic, topic_request};
use crate::state::AppState;

/// Routes mounted at `/topic-requests`.
///
/// ```text
/// POST   /                               create_topic_request
/// GET    /                               list_topic_requests
/// POST   /{env}/{topic_name}/approve     approve_topic_request
/// POST   /{env}/{topic_name}/decline     decline_topic_request
/// ```
pub fn request_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(topic_request::create_topic_request).get(topic_request::list_topic_requests),
        )
        .route(
            "/{env}/{topic_name}/approve",
            post(topic_request::approve_topic_request),
        )
        .route(
            "/{env}/{topic_name}/decline",
            post(topic_request::decline_topic_request),
        )
}

/// Routes mounted at `/topics`.
///
/// ```text
/// GET    /            list_topics
/// POST   /promote     promote_topic
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(topic::list_topics))
        .route("/promote", post(topic::promote_topic))
}
