//! Activity Command Handlers

use std::sync::Arc;

use crate::application::commands::DeleteActivity;
use crate::application::error::ApplicationError;
use crate::application::ports::ActivityRepositoryPort;

/// DeleteActivity Handler
pub struct DeleteActivityHandler {
    activity_repo: Arc<dyn ActivityRepositoryPort>,
}

impl DeleteActivityHandler {
    pub fn new(activity_repo: Arc<dyn ActivityRepositoryPort>) -> Self {
        Self { activity_repo }
    }

    pub async fn handle(&self, command: DeleteActivity) -> Result<(), ApplicationError> {
        let activity_id = command.activity_id;

        if !self.activity_repo.delete(activity_id).await? {
            return Err(ApplicationError::not_found("Activity", activity_id));
        }

        tracing::info!(activity_id, "Activity deleted");

        Ok(())
    }
}
