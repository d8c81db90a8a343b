//! AI Output Log Port - 出站端口
//!
//! 将 AI 服务的输出追加写入日志，便于调试和回放

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// 默认日志标签
pub const DEFAULT_LOG_LABEL: &str = "analysis";

/// 日志写入错误
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log label: {0:?}")]
    InvalidLabel(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// 校验日志标签
///
/// 标签会拼进文件名，只允许 ASCII 字母数字、`-`、`_`
pub fn validate_label(label: &str) -> Result<(), LogError> {
    let valid = !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(LogError::InvalidLabel(label.to_string()))
    }
}

/// AI Output Log Port
#[async_trait]
pub trait AiOutputLogPort: Send + Sync {
    /// 追加一条记录，返回写入的文件路径
    async fn append(&self, label: &str, entry: &Value) -> Result<PathBuf, LogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        for label in ["analysis", "game-gen", "npc_dialogue", "v2"] {
            assert!(validate_label(label).is_ok(), "label {:?}", label);
        }
    }

    #[test]
    fn test_invalid_labels() {
        for label in ["", "../etc", "a/b", "with space", "名字", "a.json"] {
            assert!(matches!(
                validate_label(label),
                Err(LogError::InvalidLabel(_))
            ));
        }
    }
}
