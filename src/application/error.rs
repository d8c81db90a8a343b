//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{AnalyzerError, LogError};
use crate::domain::BookError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<BookError> for ApplicationError {
    fn from(err: BookError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<AnalyzerError> for ApplicationError {
    fn from(err: AnalyzerError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<LogError> for ApplicationError {
    fn from(err: LogError) -> Self {
        match err {
            LogError::InvalidLabel(_) => Self::ValidationError(err.to_string()),
            LogError::Io(msg) => Self::StorageError(msg),
            LogError::Serialization(msg) => Self::InternalError(msg),
        }
    }
}
