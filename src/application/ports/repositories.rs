//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Activity, Camper, CamperChanges, Signup};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Records
// ============================================================================

/// 营员实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamperRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// 活动实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

/// 报名实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRecord {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

/// 报名及其关联活动（一次 JOIN 读出）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupActivityRecord {
    pub signup: SignupRecord,
    pub activity: ActivityRecord,
}

/// 营员及其全部报名（每个报名带活动），同一事务内读出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamperDetail {
    pub camper: CamperRecord,
    pub signups: Vec<SignupActivityRecord>,
}

// ============================================================================
// Camper Repository
// ============================================================================

/// Camper Repository Port
#[async_trait]
pub trait CamperRepositoryPort: Send + Sync {
    /// 插入营员，返回带自增 ID 的记录
    async fn insert(&self, camper: &Camper) -> Result<CamperRecord, RepositoryError>;

    /// 根据 ID 查找营员
    async fn find_by_id(&self, id: i64) -> Result<Option<CamperRecord>, RepositoryError>;

    /// 获取所有营员
    async fn find_all(&self) -> Result<Vec<CamperRecord>, RepositoryError>;

    /// 根据 ID 查找营员及其报名（报名按 ID 排序）
    async fn find_with_signups(&self, id: i64) -> Result<Option<CamperDetail>, RepositoryError>;

    /// 只写入 `changes` 中出现的字段，返回写入后的整行；营员不存在时返回 None
    async fn update_fields(
        &self,
        id: i64,
        changes: &CamperChanges,
    ) -> Result<Option<CamperRecord>, RepositoryError>;

    /// 删除营员及其全部报名，返回是否删除了营员
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 营员报名过的活动（经 signups 关联，不单独持久化）
    async fn find_activities(&self, camper_id: i64) -> Result<Vec<ActivityRecord>, RepositoryError>;
}

// ============================================================================
// Activity Repository
// ============================================================================

/// Activity Repository Port
#[async_trait]
pub trait ActivityRepositoryPort: Send + Sync {
    /// 插入活动
    async fn insert(&self, activity: &Activity) -> Result<ActivityRecord, RepositoryError>;

    /// 根据 ID 查找活动
    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityRecord>, RepositoryError>;

    /// 获取所有活动
    async fn find_all(&self) -> Result<Vec<ActivityRecord>, RepositoryError>;

    /// 删除活动及其全部报名，返回是否删除了活动
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 报名了该活动的营员（经 signups 关联，不单独持久化）
    async fn find_campers(&self, activity_id: i64) -> Result<Vec<CamperRecord>, RepositoryError>;
}

// ============================================================================
// Signup Repository
// ============================================================================

/// Signup Repository Port
#[async_trait]
pub trait SignupRepositoryPort: Send + Sync {
    /// 插入报名
    ///
    /// 营员或活动在写入时已不存在则返回 `ForeignKeyViolation`
    async fn insert(&self, signup: &Signup) -> Result<SignupRecord, RepositoryError>;

    /// 根据 ID 查找报名
    async fn find_by_id(&self, id: i64) -> Result<Option<SignupRecord>, RepositoryError>;

    /// 获取所有报名
    async fn find_all(&self) -> Result<Vec<SignupRecord>, RepositoryError>;
}
