//! Camper HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateCamper, GetCamper, ListCampers, UpdateCamper};
use crate::infrastructure::http::dto::{
    CamperDetailView, CamperView, CreateCamperRequest, UpdateCamperRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 非整数 ID 与不存在的 ID 一样按 404 处理
fn camper_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound("Camper"))
}

/// 获取营员列表（不含报名）
pub async fn list_campers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CamperView>>, ApiError> {
    let campers = state.list_campers_handler.handle(ListCampers).await?;
    Ok(Json(campers.into_iter().map(CamperView::from).collect()))
}

/// 创建营员
pub async fn create_camper(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateCamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let Json(req) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let command = CreateCamper {
        name: req.name,
        age: req.age,
    };
    let record = state.create_camper_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(CamperView::from(record))))
}

/// 获取营员详情（报名 + 每个报名的活动）
pub async fn get_camper(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CamperDetailView>, ApiError> {
    let camper_id = camper_id(path)?;

    let detail = state
        .get_camper_handler
        .handle(GetCamper { camper_id })
        .await?;

    Ok(Json(CamperDetailView::from(detail)))
}

/// 部分更新营员
pub async fn update_camper(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateCamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperView>), ApiError> {
    let camper_id = camper_id(path)?;
    let Json(req) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let command = UpdateCamper {
        camper_id,
        patch: req.into(),
    };
    let record = state.update_camper_handler.handle(command).await?;

    Ok((StatusCode::ACCEPTED, Json(CamperView::from(record))))
}
