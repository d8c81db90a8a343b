//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    /// 章节记录缺少 summary 字段，或字段类型不是字符串
    #[error("无效的章节记录: {0}")]
    InvalidInput(String),
}

impl BookError {
    pub fn missing_summary(position: usize) -> Self {
        Self::InvalidInput(format!("chapter {} is missing the `summary` field", position))
    }

    pub fn malformed_summary(position: usize) -> Self {
        Self::InvalidInput(format!("chapter {} has a non-string `summary` field", position))
    }
}
