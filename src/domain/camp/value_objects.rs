//! Camp Context - Value Objects

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::DomainError;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// 营员主键（自增）
    CamperId
);
row_id!(
    /// 活动主键（自增）
    ActivityId
);

/// 营员名字
///
/// 不变量: 非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperName(String);

impl CamperName {
    pub fn parse(name: Option<String>) -> Result<Self, DomainError> {
        match name {
            Some(name) if !name.is_empty() => Ok(Self(name)),
            _ => Err(DomainError::MissingName),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CamperName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 营员年龄
///
/// 不变量: 8 <= age <= 18
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamperAge(i64);

impl CamperAge {
    pub const RANGE: RangeInclusive<i64> = 8..=18;

    pub fn parse(age: Option<i64>) -> Result<Self, DomainError> {
        let age = age.ok_or(DomainError::MissingAge)?;
        if !Self::RANGE.contains(&age) {
            return Err(DomainError::AgeOutOfRange(age));
        }
        Ok(Self(age))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 报名时段（一天中的小时）
///
/// 不变量: 0 <= time <= 23
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupTime(i64);

impl SignupTime {
    pub const RANGE: RangeInclusive<i64> = 0..=23;

    pub fn parse(time: Option<i64>) -> Result<Self, DomainError> {
        let time = time.ok_or(DomainError::MissingTime)?;
        if !Self::RANGE.contains(&time) {
            return Err(DomainError::TimeOutOfRange(time));
        }
        Ok(Self(time))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
