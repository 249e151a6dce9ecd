//! Signup HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::CreateSignup;
use crate::infrastructure::http::dto::{CreateSignupRequest, SignupDetailView};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建报名，响应展开活动和营员
pub async fn create_signup(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupDetailView>), ApiError> {
    let Json(req) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let command = CreateSignup {
        camper_id: req.camper_id,
        activity_id: req.activity_id,
        time: req.time,
    };
    let detail = state.create_signup_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(SignupDetailView::from(detail))))
}
