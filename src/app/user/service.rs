//! 用户业务服务

use sqlx::sqlite::SqlitePool;
use tracing::info;

use super::model::{User, UserPayload};
use crate::core::error::CoreError;

const USER_NOT_FOUND: &str = "User not found";

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_user(&self, id: i64) -> Result<User, CoreError> {
        sqlx::query_as::<_, User>("SELECT id, name, age FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<User, CoreError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, age = ? WHERE id = ? RETURNING id, name, age",
        )
        .bind(&payload.name)
        .bind(payload.age)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("Updated user: {} ({})", user.name, user.id);
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(USER_NOT_FOUND.to_string()));
        }

        info!("Deleted user: {}", id);
        Ok(())
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, CoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, age) VALUES (?, ?) RETURNING id, name, age",
        )
        .bind(&payload.name)
        .bind(payload.age)
        .fetch_one(&self.pool)
        .await?;

        info!("Created user: {} ({})", user.name, user.id);
        Ok(user)
    }

    pub async fn get_users(&self, start: i64, count: i64) -> Result<Vec<User>, CoreError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, age FROM users ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(count)
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::DatabaseConfig, database::DatabaseManager};

    async fn test_service() -> UserService {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 8,
        };
        let db = DatabaseManager::new(&config).await.unwrap();
        db.ensure_table_exists().await.unwrap();
        UserService::new(db.get_pool().clone())
    }

    fn payload(name: &str, age: i64) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_incrementing_ids() {
        let service = test_service().await;

        let first = service.create_user(&payload("User 1", 10)).await.unwrap();
        let second = service.create_user(&payload("User 2", 20)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(service.get_user(2).await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let service = test_service().await;

        assert!(matches!(service.get_user(45).await, Err(CoreError::NotFound(_))));
        assert!(matches!(
            service.update_user(45, &payload("x", 1)).await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(service.delete_user(45).await, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let service = test_service().await;
        let created = service.create_user(&payload("before", 10)).await.unwrap();

        let updated = service
            .update_user(created.id, &payload("after", 21))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "after");
        assert_eq!(updated.age, 21);
    }

    #[tokio::test]
    async fn test_get_users_paginates() {
        let service = test_service().await;
        for i in 1..=5 {
            service
                .create_user(&payload(&format!("User {}", i), i * 10))
                .await
                .unwrap();
        }

        let page = service.get_users(1, 2).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(service.get_users(10, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let service = test_service().await;
        let created = service.create_user(&payload("gone", 40)).await.unwrap();

        service.delete_user(created.id).await.unwrap();

        assert!(service.get_users(0, 10).await.unwrap().is_empty());
    }
}
