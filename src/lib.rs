//! # 用户 REST API
//!
//! 基于 Axum + SQLx(SQLite) 的单资源 CRUD 服务：
//! - `app`：路由装配与用户处理器、服务、模型
//! - `core`：错误处理、响应结构、中间件
//! - `infrastructure`：配置、数据库、日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::{App, AppState};
pub use crate::core::error::CoreError;
pub use crate::infrastructure::config::Config;
