//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod ai_log;
pub mod analyzer;

pub use ai_log::*;
pub use analyzer::*;
