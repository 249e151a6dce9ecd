//! Signup Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateSignup;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ActivityRecord, ActivityRepositoryPort, CamperRecord, CamperRepositoryPort, SignupRecord,
    SignupRepositoryPort,
};
use crate::domain::{ActivityId, CamperId, DomainError, Signup};

/// 创建报名响应（带营员和活动）
#[derive(Debug, Clone)]
pub struct SignupDetail {
    pub signup: SignupRecord,
    pub camper: CamperRecord,
    pub activity: ActivityRecord,
}

/// CreateSignup Handler
pub struct CreateSignupHandler {
    camper_repo: Arc<dyn CamperRepositoryPort>,
    activity_repo: Arc<dyn ActivityRepositoryPort>,
    signup_repo: Arc<dyn SignupRepositoryPort>,
}

impl CreateSignupHandler {
    pub fn new(
        camper_repo: Arc<dyn CamperRepositoryPort>,
        activity_repo: Arc<dyn ActivityRepositoryPort>,
        signup_repo: Arc<dyn SignupRepositoryPort>,
    ) -> Self {
        Self {
            camper_repo,
            activity_repo,
            signup_repo,
        }
    }

    pub async fn handle(&self, command: CreateSignup) -> Result<SignupDetail, ApplicationError> {
        let activity = self.resolve_activity(command.activity_id).await?;
        let camper = self.resolve_camper(command.camper_id).await?;

        let signup = Signup::new(
            command.time,
            CamperId::new(camper.id),
            ActivityId::new(activity.id),
        )?;

        let record = self.signup_repo.insert(&signup).await?;

        tracing::info!(
            signup_id = record.id,
            camper_id = record.camper_id,
            activity_id = record.activity_id,
            time = record.time,
            "Signup created"
        );

        Ok(SignupDetail {
            signup: record,
            camper,
            activity,
        })
    }

    async fn resolve_camper(&self, id: Option<i64>) -> Result<CamperRecord, ApplicationError> {
        let id = id.ok_or(DomainError::MissingCamperId)?;
        let camper = self
            .camper_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UnknownCamper(id))?;
        Ok(camper)
    }

    async fn resolve_activity(&self, id: Option<i64>) -> Result<ActivityRecord, ApplicationError> {
        let id = id.ok_or(DomainError::MissingActivityId)?;
        let activity = self
            .activity_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UnknownActivity(id))?;
        Ok(activity)
    }
}
