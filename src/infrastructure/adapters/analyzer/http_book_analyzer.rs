//! HTTP Book Analyzer - 调用外部书籍分析 HTTP 服务
//!
//! 实现 BookAnalyzerPort trait
//!
//! 外部分析 API:
//! POST http://localhost:8100/api/analyze
//! Request:  {"title": "..."}  (JSON)
//! Response: {"title": "...", "chapters": [{"summary": "..."}, ...]}  (JSON)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{AnalyzerError, BookAnalyzerPort};
use crate::domain::{chapters_from_records, BookAnalysis};

/// 分析请求体 (JSON)
#[derive(Debug, Serialize)]
struct AnalyzeHttpRequest<'a> {
    title: &'a str,
}

/// 分析响应体 (JSON)
///
/// 章节先按未类型化记录接收，再统一校验 summary 字段。
/// `chapters` 必须存在，缺失时解码失败
#[derive(Debug, Deserialize)]
struct AnalyzeHttpResponse {
    #[serde(default)]
    title: Option<String>,
    chapters: Vec<Value>,
}

/// HTTP 分析客户端配置
#[derive(Debug, Clone)]
pub struct HttpBookAnalyzerConfig {
    /// 分析服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpBookAnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8100".to_string(),
            timeout_secs: 60,
        }
    }
}

impl HttpBookAnalyzerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Book Analyzer
pub struct HttpBookAnalyzer {
    client: Client,
    config: HttpBookAnalyzerConfig,
}

impl HttpBookAnalyzer {
    /// 创建新的分析客户端
    pub fn new(config: HttpBookAnalyzerConfig) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.config.base_url.trim_end_matches('/'))
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url.trim_end_matches('/'))
    }
}

/// 将服务响应转换为领域对象
///
/// 响应未带标题时沿用请求中的书名
fn into_analysis(requested_title: &str, body: AnalyzeHttpResponse) -> Result<BookAnalysis, AnalyzerError> {
    let chapters = chapters_from_records(&body.chapters)
        .map_err(|e| AnalyzerError::InvalidResponse(e.to_string()))?;
    let title = body.title.unwrap_or_else(|| requested_title.to_string());

    Ok(BookAnalysis::new(title, chapters))
}

#[async_trait]
impl BookAnalyzerPort for HttpBookAnalyzer {
    async fn analyze(&self, title: &str) -> Result<BookAnalysis, AnalyzerError> {
        tracing::debug!(url = %self.analyze_url(), title = %title, "Sending analyze request");

        let response = self
            .client
            .post(self.analyze_url())
            .json(&AnalyzeHttpRequest { title })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalyzerError::Timeout
                } else if e.is_connect() {
                    AnalyzerError::NetworkError(format!("Cannot connect to analysis service: {}", e))
                } else {
                    AnalyzerError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: AnalyzeHttpResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::InvalidResponse(format!("Failed to decode analysis: {}", e)))?;

        let analysis = into_analysis(title, body)?;

        tracing::info!(
            title = %analysis.title,
            chapters = analysis.chapters.len(),
            "Book analysis completed"
        );

        Ok(analysis)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
