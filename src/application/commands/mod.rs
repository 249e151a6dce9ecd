//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod activity_commands;
mod camper_commands;
mod signup_commands;

pub mod handlers;

pub use activity_commands::*;
pub use camper_commands::*;
pub use signup_commands::*;
