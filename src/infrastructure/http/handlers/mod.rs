//! HTTP Handlers
//!
//! 每个处理器只做一次命令/查询分发，再用 dto 中的视图渲染

mod activity;
mod camper;
mod home;
mod signup;

pub use activity::*;
pub use camper::*;
pub use home::*;
pub use signup::*;
