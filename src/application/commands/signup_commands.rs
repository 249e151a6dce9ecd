//! Signup Commands

/// 创建报名命令
///
/// 字段都可能缺失，缺失与越界一样按校验错误处理
#[derive(Debug, Clone)]
pub struct CreateSignup {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}
