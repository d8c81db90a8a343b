//! bookforge - 书籍到 3D 游戏的 AI 内容桥接服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 书籍分析结果、章节摘要
//! - 纯函数变换: 提示词组装、NPC 对话截断、事件 → 游戏动作翻译
//!
//! 应用层 (application/):
//! - Ports: BookAnalyzerPort, AiOutputLogPort
//! - Commands: 分析书籍、清理对话、翻译事件、记录 AI 输出
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 表单入口 + JSON API
//! - Adapters: HTTP/占位分析器, 按日期追加的 JSON 日志

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
