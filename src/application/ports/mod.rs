//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod ai_output_log;
mod book_analyzer;

pub use ai_output_log::{validate_label, AiOutputLogPort, LogError, DEFAULT_LOG_LABEL};
pub use book_analyzer::{AnalyzerError, BookAnalyzerPort};
