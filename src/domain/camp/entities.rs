//! Camp Context - Entities

use serde::{Deserialize, Serialize};

use super::{ActivityId, CamperId, DomainError, SignupTime};

/// 报名 - 营员与活动的关联
///
/// 不变量:
/// - time 在 0 到 23 之间
/// - camper_id / activity_id 只能来自已解析的引用（由应用层查库确认）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    time: SignupTime,
    camper_id: CamperId,
    activity_id: ActivityId,
}

impl Signup {
    pub fn new(
        time: Option<i64>,
        camper_id: CamperId,
        activity_id: ActivityId,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            time: SignupTime::parse(time)?,
            camper_id,
            activity_id,
        })
    }

    pub fn time(&self) -> SignupTime {
        self.time
    }

    pub fn camper_id(&self) -> CamperId {
        self.camper_id
    }

    pub fn activity_id(&self) -> ActivityId {
        self.activity_id
    }
}
