//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod activity_queries;
mod camper_queries;

pub mod handlers;

pub use activity_queries::*;
pub use camper_queries::*;
