//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Camper/Activity/Signup Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Camper commands
    CreateCamper,
    UpdateCamper,
    // Activity commands
    DeleteActivity,
    // Signup commands
    CreateSignup,
    // Handlers
    handlers::{
        CreateCamperHandler, CreateSignupHandler, DeleteActivityHandler, SignupDetail,
        UpdateCamperHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    ActivityRecord, ActivityRepositoryPort, CamperDetail, CamperRecord, CamperRepositoryPort,
    RepositoryError, SignupActivityRecord, SignupRecord, SignupRepositoryPort,
};

pub use queries::{
    // Camper queries
    GetCamper,
    ListCampers,
    // Activity queries
    ListActivities,
    // Handlers
    handlers::{GetCamperHandler, ListActivitiesHandler, ListCampersHandler},
};
