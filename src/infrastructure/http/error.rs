//! HTTP Error Handling
//!
//! 错误响应体只有两种形状：
//! - `{"error": "<message>"}`
//! - `{"errors": ["<message>", ...]}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 校验失败时返回给客户端的固定消息（字段级细节只写日志）
pub const VALIDATION_ERRORS: &str = "validation errors";

/// 单条错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 多条错误响应
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 资源不存在，携带资源类型名（如 "Camper"）
    NotFound(&'static str),
    /// 字段校验失败，携带仅用于日志的细节
    Validation(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(resource) => {
                let message = format!("{} not found", resource);
                tracing::warn!(status = 404, error = %message, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response()
            }
            ApiError::Validation(detail) => {
                tracing::warn!(status = 400, error = %detail, "Validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorsResponse {
                        errors: vec![VALIDATION_ERRORS.to_string()],
                    }),
                )
                    .into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(status = 500, error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, .. } => ApiError::NotFound(resource_type),
            ApplicationError::ValidationError(msg) => ApiError::Validation(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}
