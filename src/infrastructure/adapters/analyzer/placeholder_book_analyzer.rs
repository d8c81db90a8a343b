//! Placeholder Book Analyzer - 不调用外部服务的分析器
//!
//! 对任意书名返回单章占位摘要，用于本地演示和没有分析服务的环境

use async_trait::async_trait;

use crate::application::ports::{AnalyzerError, BookAnalyzerPort};
use crate::domain::{BookAnalysis, ChapterSummary};

/// 占位章节摘要
pub const PLACEHOLDER_SUMMARY: &str = "Example chapter summary";

/// Placeholder Book Analyzer
#[derive(Debug, Default)]
pub struct PlaceholderBookAnalyzer;

impl PlaceholderBookAnalyzer {
    pub fn new() -> Self {
        tracing::info!("PlaceholderBookAnalyzer initialized, analysis service will not be called");
        Self
    }
}

#[async_trait]
impl BookAnalyzerPort for PlaceholderBookAnalyzer {
    async fn analyze(&self, title: &str) -> Result<BookAnalysis, AnalyzerError> {
        tracing::debug!(title = %title, "PlaceholderBookAnalyzer: returning placeholder analysis");

        Ok(BookAnalysis::new(
            title,
            vec![ChapterSummary::new(PLACEHOLDER_SUMMARY)],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_analysis() {
        let analyzer = PlaceholderBookAnalyzer::new();
        let analysis = analyzer.analyze("Treasure Island").await.unwrap();

        assert_eq!(analysis.title, "Treasure Island");
        assert_eq!(analysis.chapters, vec![ChapterSummary::new(PLACEHOLDER_SUMMARY)]);
        assert!(analyzer.health_check().await);
    }
}
