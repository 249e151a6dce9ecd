//! Camp Signup - 夏令营报名服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Camp Context: 营员、活动、报名，以及赋值时的字段校验
//!
//! 应用层 (application/):
//! - Ports: 仓储端口定义
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API（axum）
//! - Persistence: SQLite 存储（sqlx）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
