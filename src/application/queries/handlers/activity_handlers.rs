//! Activity Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ActivityRecord, ActivityRepositoryPort};
use crate::application::queries::ListActivities;

/// ListActivities Handler
pub struct ListActivitiesHandler {
    activity_repo: Arc<dyn ActivityRepositoryPort>,
}

impl ListActivitiesHandler {
    pub fn new(activity_repo: Arc<dyn ActivityRepositoryPort>) -> Self {
        Self { activity_repo }
    }

    pub async fn handle(
        &self,
        _query: ListActivities,
    ) -> Result<Vec<ActivityRecord>, ApplicationError> {
        Ok(self.activity_repo.find_all().await?)
    }
}
