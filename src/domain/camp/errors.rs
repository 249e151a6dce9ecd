//! Camp Context - Errors

use thiserror::Error;

/// 字段校验失败的具体原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("营员必须有名字")]
    MissingName,

    #[error("营员年龄缺失")]
    MissingAge,

    #[error("营员年龄必须在 8 到 18 之间: {0}")]
    AgeOutOfRange(i64),

    #[error("报名时间缺失")]
    MissingTime,

    #[error("报名时间必须在 0 到 23 之间: {0}")]
    TimeOutOfRange(i64),

    #[error("报名缺少营员 ID")]
    MissingCamperId,

    #[error("营员 ID 必须指向已存在的营员: {0}")]
    UnknownCamper(i64),

    #[error("报名缺少活动 ID")]
    MissingActivityId,

    #[error("活动 ID 必须指向已存在的活动: {0}")]
    UnknownActivity(i64),
}
