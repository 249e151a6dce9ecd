//! Camp Context - Aggregate Roots

use serde::{Deserialize, Serialize};

use super::{CamperAge, CamperName, DomainError};

/// Camper 聚合根
///
/// 不变量:
/// - 名字非空
/// - 年龄在 8 到 18 之间
///
/// 构造和部分更新（[`CamperChanges`]）共用同一套值对象校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camper {
    name: CamperName,
    age: CamperAge,
}

impl Camper {
    /// 创建新营员
    pub fn new(name: Option<String>, age: Option<i64>) -> Result<Self, DomainError> {
        Ok(Self {
            name: CamperName::parse(name)?,
            age: CamperAge::parse(age)?,
        })
    }

    // Getters
    pub fn name(&self) -> &CamperName {
        &self.name
    }

    pub fn age(&self) -> CamperAge {
        self.age
    }
}

/// 营员部分更新
///
/// 外层 `None` 表示字段未出现，`Some(None)` 表示显式传入 null。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperPatch {
    pub name: Option<Option<String>>,
    pub age: Option<Option<i64>>,
}

impl CamperPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }

    /// 逐个字段赋值，任一字段失败则整体失败
    pub fn validate(self) -> Result<CamperChanges, DomainError> {
        let mut changes = CamperChanges::default();
        if let Some(name) = self.name {
            changes.set_name(name)?;
        }
        if let Some(age) = self.age {
            changes.set_age(age)?;
        }
        Ok(changes)
    }
}

/// 已校验的部分更新，只含请求中出现的字段
///
/// 持久化时只写 `Some` 的列，未出现的列保持库里的当前值。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperChanges {
    name: Option<CamperName>,
    age: Option<CamperAge>,
}

impl CamperChanges {
    pub fn set_name(&mut self, name: Option<String>) -> Result<(), DomainError> {
        self.name = Some(CamperName::parse(name)?);
        Ok(())
    }

    pub fn set_age(&mut self, age: Option<i64>) -> Result<(), DomainError> {
        self.age = Some(CamperAge::parse(age)?);
        Ok(())
    }

    pub fn name(&self) -> Option<&CamperName> {
        self.name.as_ref()
    }

    pub fn age(&self) -> Option<CamperAge> {
        self.age
    }
}

/// Activity 聚合根
///
/// 名字和难度都允许为空，没有额外约束。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    name: Option<String>,
    difficulty: Option<i64>,
}

impl Activity {
    pub fn new(name: Option<String>, difficulty: Option<i64>) -> Self {
        Self { name, difficulty }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn difficulty(&self) -> Option<i64> {
        self.difficulty
    }
}
