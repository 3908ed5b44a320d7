//! 数据库基础设施

use sqlx::{
    sqlite::{SqlitePool, SqlitePoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

use super::config::DatabaseConfig;

const TABLE_CREATION_QUERY: &str = r#"
CREATE TABLE IF NOT EXISTS users
(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(50) NOT NULL,
    age INTEGER NOT NULL
)
"#;

#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        info!("Connecting to database: {}", config.url);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 确保 users 表存在
    pub async fn ensure_table_exists(&self) -> Result<(), Error> {
        sqlx::query(TABLE_CREATION_QUERY)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// 清空 users 表并重置自增序列
    pub async fn clear_table(&self) -> Result<(), Error> {
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        // sqlite_sequence 只在第一次自增插入后才存在
        let has_sequence: Option<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
        )
        .fetch_optional(&self.pool)
        .await?;
        if has_sequence.is_some() {
            sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'users'")
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// 连通性检查
    pub async fn ping(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
