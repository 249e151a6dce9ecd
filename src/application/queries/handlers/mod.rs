//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod activity_handlers;
mod camper_handlers;

pub use activity_handlers::*;
pub use camper_handlers::*;
