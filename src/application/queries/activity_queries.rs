//! Activity Queries

/// 列出所有活动查询
#[derive(Debug, Clone)]
pub struct ListActivities;
