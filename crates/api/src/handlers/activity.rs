//! Handler for `/activity-log`.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use kafkamgt_db::models::activity::ActivityLogQuery;
use kafkamgt_db::repositories::ActivityLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/activity-log?env=&limit=&offset=
pub async fn list_activity(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ActivityLogQuery>,
) -> AppResult<impl IntoResponse> {
    let entries = ActivityLogRepo::query(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: entries }))
}
