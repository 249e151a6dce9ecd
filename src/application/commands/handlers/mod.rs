//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod activity_handlers;
mod camper_handlers;
mod signup_handlers;

pub use activity_handlers::*;
pub use camper_handlers::*;
pub use signup_handlers::*;
