//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::DEFAULT_MAX_LEN;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 书籍分析服务配置
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// 预置游戏配置
    #[serde(default)]
    pub game: GameConfig,

    /// 对话清理配置
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// AI 输出日志配置
    #[serde(default)]
    pub ai_log: AiLogConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 分析服务实现
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerProvider {
    /// 不调用外部服务，返回占位分析
    #[default]
    Placeholder,
    /// 调用外部 HTTP 分析服务
    Http,
}

/// 书籍分析服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub provider: AnalyzerProvider,

    /// 分析服务基础 URL
    #[serde(default = "default_analysis_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_analysis_timeout")]
    pub timeout_secs: u64,
}

fn default_analysis_url() -> String {
    "http://localhost:8100".to_string()
}

fn default_analysis_timeout() -> u64 {
    60
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            provider: AnalyzerProvider::default(),
            url: default_analysis_url(),
            timeout_secs: default_analysis_timeout(),
        }
    }
}

/// 预置游戏配置
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// 已有预置游戏的作品标题（匹配时忽略大小写）
    #[serde(default = "default_featured_title")]
    pub featured_title: String,

    /// 预置游戏页面路径
    #[serde(default = "default_game_link")]
    pub link: String,
}

fn default_featured_title() -> String {
    "wizard of oz".to_string()
}

fn default_game_link() -> String {
    "/play/oz3d".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            featured_title: default_featured_title(),
            link: default_game_link(),
        }
    }
}

/// 对话清理配置
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// 默认最大字符数
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

fn default_max_len() -> usize {
    DEFAULT_MAX_LEN
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
        }
    }
}

/// AI 输出日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct AiLogConfig {
    /// 是否记录 AI 输出
    #[serde(default = "default_ai_log_enabled")]
    pub enabled: bool,

    /// 日志目录
    #[serde(default = "default_ai_log_dir")]
    pub dir: PathBuf,
}

fn default_ai_log_enabled() -> bool {
    true
}

fn default_ai_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Default for AiLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_ai_log_enabled(),
            dir: default_ai_log_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
