//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get compile-time
//! type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Result of an approve/decline action.
///
/// Only ever built after the action actually changed something; failures are
/// reported through `AppError` with a non-2xx status instead.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub result: &'static str,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            result: "success",
            message: message.into(),
        }
    }
}
