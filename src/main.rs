//! Camp Signup - 夏令营报名服务
//!
//! 启动流程：配置 → 日志 → 数据库 → HTTP 服务器

use camp_signup::config::{load_config, print_config, AppConfig};
use camp_signup::infrastructure::http::{AppState, HttpServer, ServerConfig};
use camp_signup::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig,
};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},camp_signup={},tower_http=debug,sqlx=warn",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        return;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Camp Signup API");
    print_config(&config);

    // 确保数据目录存在
    if config.database.uses_file_path() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::from_pool(pool.clone()));

    server.run_with_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
