//! AI Output Log Commands

use serde_json::Value;

/// 记录一条 AI 输出
#[derive(Debug, Clone)]
pub struct RecordAiOutput {
    /// 未指定时使用默认标签
    pub label: Option<String>,
    pub payload: Value,
}
