//! Camper Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCamper, UpdateCamper};
use crate::application::error::ApplicationError;
use crate::application::ports::{CamperRecord, CamperRepositoryPort};
use crate::domain::Camper;

// ============================================================================
// CreateCamper
// ============================================================================

/// CreateCamper Handler
pub struct CreateCamperHandler {
    camper_repo: Arc<dyn CamperRepositoryPort>,
}

impl CreateCamperHandler {
    pub fn new(camper_repo: Arc<dyn CamperRepositoryPort>) -> Self {
        Self { camper_repo }
    }

    pub async fn handle(&self, command: CreateCamper) -> Result<CamperRecord, ApplicationError> {
        let camper = Camper::new(command.name, command.age)?;
        let record = self.camper_repo.insert(&camper).await?;

        tracing::info!(
            camper_id = record.id,
            name = %record.name,
            "Camper created"
        );

        Ok(record)
    }
}

// ============================================================================
// UpdateCamper
// ============================================================================

/// UpdateCamper Handler
pub struct UpdateCamperHandler {
    camper_repo: Arc<dyn CamperRepositoryPort>,
}

impl UpdateCamperHandler {
    pub fn new(camper_repo: Arc<dyn CamperRepositoryPort>) -> Self {
        Self { camper_repo }
    }

    pub async fn handle(&self, command: UpdateCamper) -> Result<CamperRecord, ApplicationError> {
        let camper_id = command.camper_id;

        if command.patch.is_empty() {
            return self
                .camper_repo
                .find_by_id(camper_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("Camper", camper_id));
        }

        let changes = match command.patch.validate() {
            Ok(changes) => changes,
            // 不存在的营员优先报 404
            Err(e) => {
                if self.camper_repo.find_by_id(camper_id).await?.is_none() {
                    return Err(ApplicationError::not_found("Camper", camper_id));
                }
                return Err(e.into());
            }
        };

        // 只写请求中出现的列
        let record = self
            .camper_repo
            .update_fields(camper_id, &changes)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Camper", camper_id))?;

        tracing::info!(camper_id, "Camper updated");

        Ok(record)
    }
}
