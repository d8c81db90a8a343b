//! Book Context - 书籍分析限界上下文
//!
//! 职责:
//! - 章节摘要实体
//! - 分析结果（标题 + 有序章节）
//! - 未类型化章节记录的校验

mod entities;
mod errors;

pub use entities::{chapters_from_records, BookAnalysis, ChapterSummary};
pub use errors::BookError;
