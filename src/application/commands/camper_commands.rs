//! Camper Commands

use crate::domain::CamperPatch;

/// 创建营员命令
#[derive(Debug, Clone)]
pub struct CreateCamper {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// 部分更新营员命令
#[derive(Debug, Clone)]
pub struct UpdateCamper {
    pub camper_id: i64,
    pub patch: CamperPatch,
}
