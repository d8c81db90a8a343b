//! bookforge - 书籍分析 → 3D 游戏生成桥接服务

use std::sync::Arc;

use bookforge::application::{AiOutputLogPort, BookAnalyzerPort, FeaturedGame};
use bookforge::config::{load_config, print_config, AnalyzerProvider, AppConfig};
use bookforge::infrastructure::adapters::{
    FileAiOutputLog, HttpBookAnalyzer, HttpBookAnalyzerConfig, PlaceholderBookAnalyzer,
};
use bookforge::infrastructure::http::{AppState, HttpServer, ServerConfig};

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},bookforge={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

/// 按配置创建分析器
fn build_analyzer(config: &AppConfig) -> anyhow::Result<Arc<dyn BookAnalyzerPort>> {
    let analyzer: Arc<dyn BookAnalyzerPort> = match config.analysis.provider {
        AnalyzerProvider::Placeholder => Arc::new(PlaceholderBookAnalyzer::new()),
        AnalyzerProvider::Http => {
            let analyzer_config = HttpBookAnalyzerConfig::new(config.analysis.url.clone())
                .with_timeout(config.analysis.timeout_secs);
            Arc::new(HttpBookAnalyzer::new(analyzer_config)?)
        }
    };
    Ok(analyzer)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("bookforge - 书籍到 3D 游戏桥接服务");
    print_config(&config);

    let analyzer = build_analyzer(&config)?;
    if !analyzer.health_check().await {
        tracing::warn!(url = %config.analysis.url, "Analysis service is not reachable yet");
    }

    let output_log = if config.ai_log.enabled {
        let file_log: Arc<dyn AiOutputLogPort> =
            Arc::new(FileAiOutputLog::new(&config.ai_log.dir).await?);
        Some(file_log)
    } else {
        None
    };

    let state = AppState::new(
        analyzer,
        output_log,
        FeaturedGame::new(&config.game.featured_title, &config.game.link),
        config.dialogue.max_len,
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 无法监听信号时保持运行
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
