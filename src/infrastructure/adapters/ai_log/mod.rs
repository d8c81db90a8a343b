//! AI Output Log Adapter - 文件日志实现

mod file_ai_output_log;

pub use file_ai_output_log::{FileAiOutputLog, RECORD_SEPARATOR};
