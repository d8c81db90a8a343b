//! Analyze Command Handlers
//!
//! 书名 → 分析服务 → 提示词 → 日志 → （可选）预置游戏链接

use std::sync::Arc;

use crate::application::commands::AnalyzeBook;
use crate::application::error::ApplicationError;
use crate::application::ports::{AiOutputLogPort, BookAnalyzerPort, DEFAULT_LOG_LABEL};
use crate::domain::{build_prompt, BookAnalysis};

/// 已有预置游戏的作品
#[derive(Debug, Clone)]
pub struct FeaturedGame {
    /// 作品标题，匹配时忽略大小写
    pub title: String,
    /// 游戏页面路径
    pub link: String,
}

impl FeaturedGame {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }

    /// 书名是否为该作品
    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase() == self.title.to_lowercase()
    }
}

/// 分析结果
#[derive(Debug, Clone)]
pub struct AnalyzeBookResponse {
    pub analysis: BookAnalysis,
    pub prompt: String,
    pub game_link: Option<String>,
}

/// AnalyzeBook Handler
pub struct AnalyzeBookHandler {
    analyzer: Arc<dyn BookAnalyzerPort>,
    output_log: Option<Arc<dyn AiOutputLogPort>>,
    featured: FeaturedGame,
}

impl AnalyzeBookHandler {
    pub fn new(
        analyzer: Arc<dyn BookAnalyzerPort>,
        output_log: Option<Arc<dyn AiOutputLogPort>>,
        featured: FeaturedGame,
    ) -> Self {
        Self {
            analyzer,
            output_log,
            featured,
        }
    }

    pub async fn handle(&self, command: AnalyzeBook) -> Result<AnalyzeBookResponse, ApplicationError> {
        let analysis = self.analyzer.analyze(&command.title).await?;
        let prompt = build_prompt(&analysis.title, &analysis.chapters);

        // 日志写入失败不影响本次请求
        if let Some(output_log) = &self.output_log {
            match serde_json::to_value(&analysis) {
                Ok(entry) => {
                    if let Err(e) = output_log.append(DEFAULT_LOG_LABEL, &entry).await {
                        tracing::warn!(title = %command.title, error = %e, "Failed to log analysis output");
                    }
                }
                Err(e) => {
                    tracing::warn!(title = %command.title, error = %e, "Failed to serialize analysis output");
                }
            }
        }

        let game_link = self
            .featured
            .matches(&command.title)
            .then(|| self.featured.link.clone());

        tracing::info!(
            title = %command.title,
            chapters = analysis.chapters.len(),
            prompt_len = prompt.len(),
            featured = game_link.is_some(),
            "Book analyzed"
        );

        Ok(AnalyzeBookResponse {
            analysis,
            prompt,
            game_link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AnalyzerError, LogError};
    use crate::domain::ChapterSummary;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct StaticAnalyzer;

    #[async_trait]
    impl BookAnalyzerPort for StaticAnalyzer {
        async fn analyze(&self, title: &str) -> Result<BookAnalysis, AnalyzerError> {
            Ok(BookAnalysis::new(
                title,
                vec![
                    ChapterSummary::new("Dorothy is swept away to Oz."),
                    ChapterSummary::new("She meets the Scarecrow."),
                ],
            ))
        }
    }

    struct DownAnalyzer;

    #[async_trait]
    impl BookAnalyzerPort for DownAnalyzer {
        async fn analyze(&self, _title: &str) -> Result<BookAnalysis, AnalyzerError> {
            Err(AnalyzerError::Timeout)
        }
    }

    #[derive(Default)]
    struct RecordingLog {
        entries: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl AiOutputLogPort for RecordingLog {
        async fn append(&self, label: &str, entry: &Value) -> Result<PathBuf, LogError> {
            self.entries
                .lock()
                .unwrap()
                .push((label.to_string(), entry.clone()));
            Ok(PathBuf::from(format!("logs/{}.json", label)))
        }
    }

    struct BrokenLog;

    #[async_trait]
    impl AiOutputLogPort for BrokenLog {
        async fn append(&self, _label: &str, _entry: &Value) -> Result<PathBuf, LogError> {
            Err(LogError::Io("disk full".to_string()))
        }
    }

    fn oz() -> FeaturedGame {
        FeaturedGame::new("wizard of oz", "/play/oz3d")
    }

    #[test]
    fn test_featured_match_ignores_case() {
        let featured = oz();
        assert!(featured.matches("Wizard of Oz"));
        assert!(featured.matches("WIZARD OF OZ"));
        assert!(!featured.matches("The Wizard of Oz"));
        assert!(!featured.matches(""));
    }

    #[tokio::test]
    async fn test_featured_title_gets_game_link() {
        let handler = AnalyzeBookHandler::new(Arc::new(StaticAnalyzer), None, oz());
        let response = handler
            .handle(AnalyzeBook {
                title: "Wizard Of Oz".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.game_link.as_deref(), Some("/play/oz3d"));
        assert_eq!(
            response.prompt,
            "Create a 3D first-person RPG based on 'Wizard Of Oz'.\n\
             Chapter 1: Dorothy is swept away to Oz.\n\
             Chapter 2: She meets the Scarecrow."
        );
    }

    #[tokio::test]
    async fn test_other_title_has_no_game_link() {
        let handler = AnalyzeBookHandler::new(Arc::new(StaticAnalyzer), None, oz());
        let response = handler
            .handle(AnalyzeBook {
                title: "Moby Dick".to_string(),
            })
            .await
            .unwrap();

        assert!(response.game_link.is_none());
        assert_eq!(response.analysis.title, "Moby Dick");
    }

    #[tokio::test]
    async fn test_analysis_is_logged() {
        let log = Arc::new(RecordingLog::default());
        let output_log: Arc<dyn AiOutputLogPort> = log.clone();
        let handler = AnalyzeBookHandler::new(Arc::new(StaticAnalyzer), Some(output_log), oz());
        handler
            .handle(AnalyzeBook {
                title: "Dune".to_string(),
            })
            .await
            .unwrap();

        let entries = log.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, DEFAULT_LOG_LABEL);
        assert_eq!(entries[0].1["title"], "Dune");
        assert_eq!(entries[0].1["chapters"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_log_failure_does_not_fail_request() {
        let output_log: Arc<dyn AiOutputLogPort> = Arc::new(BrokenLog);
        let handler = AnalyzeBookHandler::new(Arc::new(StaticAnalyzer), Some(output_log), oz());
        let result = handler
            .handle(AnalyzeBook {
                title: "Dune".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_analyzer_failure_is_external_error() {
        let handler = AnalyzeBookHandler::new(Arc::new(DownAnalyzer), None, oz());
        let err = handler
            .handle(AnalyzeBook {
                title: "Dune".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
    }
}
