//! Analyzer Adapter - 书籍分析服务实现

mod http_book_analyzer;
mod placeholder_book_analyzer;

pub use http_book_analyzer::*;
pub use placeholder_book_analyzer::{PlaceholderBookAnalyzer, PLACEHOLDER_SUMMARY};
