//! Activity HTTP Handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteActivity, ListActivities};
use crate::infrastructure::http::dto::ActivityView;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取活动列表（不含报名）
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ActivityView>>, ApiError> {
    let activities = state.list_activities_handler.handle(ListActivities).await?;
    Ok(Json(activities.into_iter().map(ActivityView::from).collect()))
}

/// 删除活动（级联删除其报名）
pub async fn delete_activity(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(activity_id) = path.map_err(|_| ApiError::NotFound("Activity"))?;

    state
        .delete_activity_handler
        .handle(DeleteActivity { activity_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
