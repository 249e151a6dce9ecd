//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Camp Context: 营员、活动与报名

pub mod camp;

pub use camp::{
    Activity, ActivityId, Camper, CamperAge, CamperChanges, CamperId, CamperName, CamperPatch,
    DomainError, Signup, SignupTime,
};
