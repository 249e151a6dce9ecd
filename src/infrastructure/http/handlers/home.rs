//! Home Handler

/// 根路径：200，空响应体
pub async fn home() {}
