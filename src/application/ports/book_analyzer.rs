//! Book Analyzer Port - 书籍分析服务抽象
//!
//! 定义书籍分析的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::BookAnalysis;

/// 分析服务错误
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Book Analyzer Port
///
/// 外部书籍分析服务的抽象接口：输入书名，输出有序的章节摘要
#[async_trait]
pub trait BookAnalyzerPort: Send + Sync {
    /// 分析一本书
    async fn analyze(&self, title: &str) -> Result<BookAnalysis, AnalyzerError>;

    /// 检查分析服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
