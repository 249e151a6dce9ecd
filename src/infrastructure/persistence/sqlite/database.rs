//! SQLite Database - 数据库连接和迁移

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 内存数据库，连接不过期（最后一个连接关闭时库即消失）
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// 数据库连接池（每个请求经由仓储使用，无其他共享状态）
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    // PRAGMA 按连接生效，放在连接选项里保证池中每个连接都一致
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_millis(5000));

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
    if config.is_in_memory() {
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool created with foreign keys, WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 campers 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS campers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 activities 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS activities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            difficulty INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 signups 表（父行删除时级联）
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS signups (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            time INTEGER NOT NULL,
            camper_id INTEGER NOT NULL,
            activity_id INTEGER NOT NULL,
            CONSTRAINT fk_signups_camper_id_campers
                FOREIGN KEY (camper_id) REFERENCES campers(id) ON DELETE CASCADE,
            CONSTRAINT fk_signups_activity_id_activities
                FOREIGN KEY (activity_id) REFERENCES activities(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建索引
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS ix_signups_camper_id
        ON signups(camper_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS ix_signups_activity_id
        ON signups(activity_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 清空全部业务数据并重置自增序列
pub async fn clear_all_data(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for table in ["signups", "activities", "campers"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('signups', 'activities', 'campers')")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("All camp data cleared");
    Ok(())
}

/// sqlx 错误转换为仓储错误
pub(crate) fn db_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepositoryError::ForeignKeyViolation(db.message().to_string())
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}

/// 测试用：已迁移的内存数据库
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // 迁移可重复执行
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let pool = test_pool().await;

        let err = sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (1, 7, 7)")
            .execute(&pool)
            .await
            .unwrap_err();

        assert!(matches!(db_error(err), RepositoryError::ForeignKeyViolation(_)));
    }

    #[tokio::test]
    async fn test_clear_all_data_resets_ids() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO campers (name, age) VALUES ('Alex', 12)")
            .execute(&pool)
            .await
            .unwrap();

        clear_all_data(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);

        let id = sqlx::query("INSERT INTO campers (name, age) VALUES ('Sam', 10)")
            .execute(&pool)
            .await
            .unwrap()
            .last_insert_rowid();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_in_memory_detection() {
        let config = DatabaseConfig {
            database_url: "sqlite:data/camp.db?mode=rwc".to_string(),
            max_connections: 5,
        };
        assert!(!config.is_in_memory());
        assert!(DatabaseConfig::in_memory().is_in_memory());
    }

    #[tokio::test]
    async fn test_file_database_pool() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            database_url: format!("sqlite:{}?mode=rwc", dir.path().join("camp.db").display()),
            max_connections: 2,
        };

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        sqlx::query("INSERT INTO activities (name, difficulty) VALUES ('Archery', 2)")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let pool = create_pool(&config).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
