//! Application State
//!
//! 包含端口和所有 Command Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AnalyzeBookHandler, CleanDialogueHandler, FeaturedGame, RecordAiOutputHandler,
    TranslateEventsHandler,
    // Ports
    AiOutputLogPort, BookAnalyzerPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub analyzer: Arc<dyn BookAnalyzerPort>,

    // ========== Command Handlers ==========
    pub analyze_book_handler: AnalyzeBookHandler,
    pub clean_dialogue_handler: CleanDialogueHandler,
    pub translate_events_handler: TranslateEventsHandler,
    /// AI 输出日志关闭时为 None
    pub record_ai_output_handler: Option<RecordAiOutputHandler>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        analyzer: Arc<dyn BookAnalyzerPort>,
        output_log: Option<Arc<dyn AiOutputLogPort>>,
        featured: FeaturedGame,
        dialogue_max_len: usize,
    ) -> Self {
        Self {
            analyzer: analyzer.clone(),

            analyze_book_handler: AnalyzeBookHandler::new(
                analyzer.clone(),
                output_log.clone(),
                featured,
            ),
            clean_dialogue_handler: CleanDialogueHandler::new(dialogue_max_len),
            translate_events_handler: TranslateEventsHandler::new(),
            record_ai_output_handler: output_log.map(RecordAiOutputHandler::new),
        }
    }
}
