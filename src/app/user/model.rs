//! 用户数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// 创建/更新用户请求体，body 中的 id 会被忽略
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,
}

// 分页参数
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub start: Option<i64>,
    pub count: Option<i64>,
}

impl ListUsersQuery {
    /// 返回 (start, count)：count 不在 1..=10 时取 10，start 为负时取 0
    pub fn normalized(&self) -> (i64, i64) {
        let count = match self.count {
            Some(c) if (1..=DEFAULT_PAGE_SIZE).contains(&c) => c,
            _ => DEFAULT_PAGE_SIZE,
        };
        let start = self.start.unwrap_or(0).max(0);
        (start, count)
    }
}
