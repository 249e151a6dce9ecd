//! Camp Context - 夏令营报名限界上下文
//!
//! 职责:
//! - 营员聚合（字段校验在赋值时执行）
//! - 活动聚合
//! - 报名实体（营员与活动的关联）

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{Activity, Camper, CamperChanges, CamperPatch};
pub use entities::Signup;
pub use errors::DomainError;
pub use value_objects::{ActivityId, CamperAge, CamperId, CamperName, SignupTime};
