//! Camper Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CamperDetail, CamperRecord, CamperRepositoryPort};
use crate::application::queries::{GetCamper, ListCampers};

/// GetCamper Handler
pub struct GetCamperHandler {
    camper_repo: Arc<dyn CamperRepositoryPort>,
}

impl GetCamperHandler {
    pub fn new(camper_repo: Arc<dyn CamperRepositoryPort>) -> Self {
        Self { camper_repo }
    }

    pub async fn handle(&self, query: GetCamper) -> Result<CamperDetail, ApplicationError> {
        self.camper_repo
            .find_with_signups(query.camper_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Camper", query.camper_id))
    }
}

/// ListCampers Handler
pub struct ListCampersHandler {
    camper_repo: Arc<dyn CamperRepositoryPort>,
}

impl ListCampersHandler {
    pub fn new(camper_repo: Arc<dyn CamperRepositoryPort>) -> Self {
        Self { camper_repo }
    }

    pub async fn handle(&self, _query: ListCampers) -> Result<Vec<CamperRecord>, ApplicationError> {
        Ok(self.camper_repo.find_all().await?)
    }
}
