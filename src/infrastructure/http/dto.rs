//! Data Transfer Objects
//!
//! 每个响应位置一个视图类型，显式决定展开哪些关联，
//! 避免 Camper ↔ Signup ↔ Activity 的循环引用。

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{
    ActivityRecord, CamperDetail, CamperRecord, SignupActivityRecord, SignupDetail,
};
use crate::domain::CamperPatch;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateCamperRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// 部分更新请求：区分“字段缺失”和“显式 null”，未知字段忽略
#[derive(Debug, Deserialize)]
pub struct UpdateCamperRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<i64>>,
}

impl From<UpdateCamperRequest> for CamperPatch {
    fn from(req: UpdateCamperRequest) -> Self {
        CamperPatch {
            name: req.name,
            age: req.age,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSignupRequest {
    pub camper_id: Option<i64>,
    pub activity_id: Option<i64>,
    pub time: Option<i64>,
}

/// 字段出现即为 Some（包括 null），缺失时由 `#[serde(default)]` 给 None
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// ============================================================================
// Views
// ============================================================================

/// 营员默认视图（不含报名）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperView {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<CamperRecord> for CamperView {
    fn from(record: CamperRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            age: record.age,
        }
    }
}

/// 活动默认视图（不含报名）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

impl From<ActivityRecord> for ActivityView {
    fn from(record: ActivityRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            difficulty: record.difficulty,
        }
    }
}

/// 报名视图，展开活动（用于营员详情）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupWithActivityView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivityView,
}

impl From<SignupActivityRecord> for SignupWithActivityView {
    fn from(record: SignupActivityRecord) -> Self {
        Self {
            id: record.signup.id,
            time: record.signup.time,
            camper_id: record.signup.camper_id,
            activity_id: record.signup.activity_id,
            activity: record.activity.into(),
        }
    }
}

/// 营员详情视图：报名 + 每个报名的活动
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CamperDetailView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<SignupWithActivityView>,
}

impl From<CamperDetail> for CamperDetailView {
    fn from(detail: CamperDetail) -> Self {
        Self {
            id: detail.camper.id,
            name: detail.camper.name,
            age: detail.camper.age,
            signups: detail.signups.into_iter().map(Into::into).collect(),
        }
    }
}

/// 新建报名视图：展开活动和营员
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupDetailView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivityView,
    pub camper: CamperView,
}

impl From<SignupDetail> for SignupDetailView {
    fn from(detail: SignupDetail) -> Self {
        Self {
            id: detail.signup.id,
            time: detail.signup.time,
            camper_id: detail.signup.camper_id,
            activity_id: detail.signup.activity_id,
            activity: detail.activity.into(),
            camper: detail.camper.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_distinguishes_null_from_missing() {
        let req: UpdateCamperRequest = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(req.name, Some(None));
        assert_eq!(req.age, None);

        let req: UpdateCamperRequest =
            serde_json::from_value(json!({"age": 14, "id": 99, "color": "red"})).unwrap();
        assert_eq!(req.name, None);
        assert_eq!(req.age, Some(Some(14)));
    }

    #[test]
    fn test_camper_detail_view_nests_activity_only() {
        let detail = CamperDetail {
            camper: CamperRecord {
                id: 1,
                name: "Alex".into(),
                age: 12,
            },
            signups: vec![SignupActivityRecord {
                signup: crate::application::SignupRecord {
                    id: 4,
                    time: 9,
                    camper_id: 1,
                    activity_id: 2,
                },
                activity: ActivityRecord {
                    id: 2,
                    name: Some("Archery".into()),
                    difficulty: Some(3),
                },
            }],
        };

        let value = serde_json::to_value(CamperDetailView::from(detail)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Alex",
                "age": 12,
                "signups": [{
                    "id": 4,
                    "time": 9,
                    "camper_id": 1,
                    "activity_id": 2,
                    "activity": {"id": 2, "name": "Archery", "difficulty": 3}
                }]
            })
        );
    }
}
