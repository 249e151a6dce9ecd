//! Application State
//!
//! 请求间唯一共享的是仓储背后的连接池，每个处理器经由这里拿到存储句柄

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateCamperHandler, CreateSignupHandler, DeleteActivityHandler, UpdateCamperHandler,
    // Query handlers
    GetCamperHandler, ListActivitiesHandler, ListCampersHandler,
    // Ports
    ActivityRepositoryPort, CamperRepositoryPort, SignupRepositoryPort,
};
use crate::infrastructure::persistence::sqlite::{
    DbPool, SqliteActivityRepository, SqliteCamperRepository, SqliteSignupRepository,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_camper_handler: CreateCamperHandler,
    pub update_camper_handler: UpdateCamperHandler,
    pub delete_activity_handler: DeleteActivityHandler,
    pub create_signup_handler: CreateSignupHandler,

    // ========== Query Handlers ==========
    pub list_campers_handler: ListCampersHandler,
    pub get_camper_handler: GetCamperHandler,
    pub list_activities_handler: ListActivitiesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        camper_repo: Arc<dyn CamperRepositoryPort>,
        activity_repo: Arc<dyn ActivityRepositoryPort>,
        signup_repo: Arc<dyn SignupRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_camper_handler: CreateCamperHandler::new(camper_repo.clone()),
            update_camper_handler: UpdateCamperHandler::new(camper_repo.clone()),
            delete_activity_handler: DeleteActivityHandler::new(activity_repo.clone()),
            create_signup_handler: CreateSignupHandler::new(
                camper_repo.clone(),
                activity_repo.clone(),
                signup_repo,
            ),

            // Query handlers
            list_campers_handler: ListCampersHandler::new(camper_repo.clone()),
            get_camper_handler: GetCamperHandler::new(camper_repo),
            list_activities_handler: ListActivitiesHandler::new(activity_repo),
        }
    }

    /// 用同一个 SQLite 连接池创建全部仓储
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(SqliteCamperRepository::new(pool.clone())),
            Arc::new(SqliteActivityRepository::new(pool.clone())),
            Arc::new(SqliteSignupRepository::new(pool)),
        )
    }
}
