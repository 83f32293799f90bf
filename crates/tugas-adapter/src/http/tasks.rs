/*
[INPUT]:  Draft task payloads
[OUTPUT]: Task creation confirmation or structured rejection
[POS]:    HTTP layer - task endpoints
[UPDATE]: When adding new task endpoints or changing the payload
*/

use crate::http::{Result, TugasClient};
use crate::types::CreateTaskRequest;
use reqwest::Method;

/// Task creation endpoint
pub const TASKS_ENDPOINT: &str = "/api/tasks";

impl TugasClient {
    /// Create a new task
    ///
    /// POST /api/tasks
    pub async fn create_task(&self, req: &CreateTaskRequest) -> Result<()> {
        let builder = self.request(Method::POST, TASKS_ENDPOINT)?.json(req);
        tracing::debug!(endpoint = TASKS_ENDPOINT, name = %req.name, "sending create task request");
        self.send_unit(builder).await
    }
}
