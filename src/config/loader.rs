//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AnalyzerProvider, AppConfig};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `BOOKFORGE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `BOOKFORGE_SERVER__PORT=8080`
/// - `BOOKFORGE_ANALYSIS__PROVIDER=http`
/// - `BOOKFORGE_ANALYSIS__URL=http://analysis:8100`
/// - `BOOKFORGE_AI_LOG__DIR=/var/log/bookforge`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("analysis.provider", "placeholder")?
        .set_default("analysis.url", "http://localhost:8100")?
        .set_default("analysis.timeout_secs", 60)?
        .set_default("game.featured_title", "wizard of oz")?
        .set_default("game.link", "/play/oz3d")?
        .set_default("dialogue.max_len", 150)?
        .set_default("ai_log.enabled", true)?
        .set_default("ai_log.dir", "logs")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: BOOKFORGE_ANALYSIS__URL=http://analysis:8100
    builder = builder.add_source(
        Environment::with_prefix("BOOKFORGE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.analysis.provider == AnalyzerProvider::Http && config.analysis.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Analysis URL cannot be empty when provider is http".to_string(),
        ));
    }

    if config.ai_log.enabled && config.ai_log.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "AI log directory cannot be empty".to_string(),
        ));
    }

    if !config.game.link.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "Game link must be an absolute path: {}",
            config.game.link
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Analysis Provider: {:?}", config.analysis.provider);
    if config.analysis.provider == AnalyzerProvider::Http {
        tracing::info!("Analysis URL: {}", config.analysis.url);
        tracing::info!("Analysis Timeout: {}s", config.analysis.timeout_secs);
    }
    tracing::info!(
        "Featured Game: {:?} -> {}",
        config.game.featured_title,
        config.game.link
    );
    tracing::info!("Dialogue Max Length: {}", config.dialogue.max_len);
    tracing::info!("AI Log Enabled: {}", config.ai_log.enabled);
    if config.ai_log.enabled {
        tracing::info!("AI Log Directory: {:?}", config.ai_log.dir);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_url_only_matters_for_http_provider() {
        let mut config = AppConfig::default();
        config.analysis.url = String::new();
        assert!(validate_config(&config).is_ok());

        config.analysis.provider = AnalyzerProvider::Http;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_relative_game_link() {
        let mut config = AppConfig::default();
        config.game.link = "play/oz3d".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[analysis]\nprovider = \"http\"\nurl = \"http://analysis:9000\"\n\n[dialogue]\nmax_len = 80"
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.analysis.provider, AnalyzerProvider::Http);
        assert_eq!(config.analysis.url, "http://analysis:9000");
        assert_eq!(config.dialogue.max_len, 80);
        assert_eq!(config.game.featured_title, "wizard of oz");
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/bookforge.toml")));
        assert!(result.is_err());
    }
}
