//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 无数据返回时的确认响应
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}
