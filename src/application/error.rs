//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::DomainError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // 写入时引用已失效，与查库失败同属校验错误
            RepositoryError::ForeignKeyViolation(msg) => Self::ValidationError(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}
