//! Activity Commands

/// 删除活动命令（级联删除报名）
#[derive(Debug, Clone)]
pub struct DeleteActivity {
    pub activity_id: i64,
}
