//! 用户资源

pub mod handler;
pub mod model;
pub mod service;

pub use model::{User, UserPayload};
pub use service::UserService;
