//! Workout API operations.

use lifequest_core::workout::{BulkImportRequest, WorkoutLog};

use super::LifequestClient;
use crate::error::Result;

impl LifequestClient {
    /// The caller's workouts, most recent first.
    pub async fn list_workouts(&self) -> Result<Vec<WorkoutLog>> {
        let response = self.get("/api/workouts").send().await?;
        Ok(self.handle_response(response).await?.data)
    }

    /// Import past sessions; the server stores all of them or none.
    pub async fn import_workouts(&self, req: &BulkImportRequest) -> Result<Vec<WorkoutLog>> {
        let response = self
            .post("/api/workouts/bulk-import")
            .json(req)
            .send()
            .await?;
        Ok(self.handle_response(response).await?.data)
    }
}
