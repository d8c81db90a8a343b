//! Book Context - Entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::BookError;

/// 章节摘要
///
/// 章节编号由在序列中的位置决定（从 1 开始），实体本身不保存编号
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub summary: String,
}

impl ChapterSummary {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }

    /// 从未类型化的 JSON 记录构造
    ///
    /// `position` 为 1-based 章节位置，仅用于错误信息
    pub fn from_record(record: &Value, position: usize) -> Result<Self, BookError> {
        match record.get("summary") {
            None | Some(Value::Null) => Err(BookError::missing_summary(position)),
            Some(Value::String(summary)) => Ok(Self::new(summary.clone())),
            Some(_) => Err(BookError::malformed_summary(position)),
        }
    }
}

/// 书籍分析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookAnalysis {
    pub title: String,
    pub chapters: Vec<ChapterSummary>,
}

impl BookAnalysis {
    pub fn new(title: impl Into<String>, chapters: Vec<ChapterSummary>) -> Self {
        Self {
            title: title.into(),
            chapters,
        }
    }
}

/// 校验并转换一组章节记录，保持输入顺序
///
/// 任一记录缺少 summary 即整体失败，不返回部分结果
pub fn chapters_from_records(records: &[Value]) -> Result<Vec<ChapterSummary>, BookError> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| ChapterSummary::from_record(record, i + 1))
        .collect()
}
