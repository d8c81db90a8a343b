//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookAnalyzer、AiOutputLog）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    AnalyzeBook,
    CleanDialogue,
    RecordAiOutput,
    TranslateEvents,
    // Handlers
    handlers::{
        AnalyzeBookHandler, AnalyzeBookResponse, CleanDialogueHandler, FeaturedGame,
        RecordAiOutputHandler, TranslateEventsHandler, TranslatedEvent,
    },
};

pub use error::ApplicationError;

pub use ports::{
    validate_label, AiOutputLogPort, AnalyzerError, BookAnalyzerPort, LogError, DEFAULT_LOG_LABEL,
};
