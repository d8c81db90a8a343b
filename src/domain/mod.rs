//! Domain Layer - 领域层
//!
//! - Book Context: 书籍分析结果与章节摘要
//! - 纯函数变换：提示词组装、对话截断、事件翻译

pub mod book;

mod dialogue;
mod event;
mod prompt;

pub use book::{chapters_from_records, BookAnalysis, BookError, ChapterSummary};
pub use dialogue::{trim_dialogue, trim_line, DEFAULT_MAX_LEN, ELLIPSIS};
pub use event::{translate_event, translate_events, GameAction};
pub use prompt::{build_prompt, build_prompt_from_records};
