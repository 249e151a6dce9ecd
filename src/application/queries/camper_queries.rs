//! Camper Queries

/// 获取营员详情查询（包含报名及活动）
#[derive(Debug, Clone)]
pub struct GetCamper {
    pub camper_id: i64,
}

/// 列出所有营员查询
#[derive(Debug, Clone)]
pub struct ListCampers;
