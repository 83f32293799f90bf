/*
[INPUT]:  Create-task requests from the form controller
[OUTPUT]: Submission results from the task API
[POS]:    Seam between the form controller and the network client
[UPDATE]: When adding a new submission backend
*/

use async_trait::async_trait;
use tugas_adapter::{CreateTaskRequest, TugasClient, TugasError};

/// Anything that can deliver a draft task to the backend
#[async_trait]
pub trait TaskSubmitter: Send + Sync {
    async fn create_task(&self, req: &CreateTaskRequest) -> Result<(), TugasError>;
}

#[async_trait]
impl TaskSubmitter for TugasClient {
    async fn create_task(&self, req: &CreateTaskRequest) -> Result<(), TugasError> {
        TugasClient::create_task(self, req).await
    }
}

#[async_trait]
impl<T: TaskSubmitter + ?Sized> TaskSubmitter for std::sync::Arc<T> {
    async fn create_task(&self, req: &CreateTaskRequest) -> Result<(), TugasError> {
        (**self).create_task(req).await
    }
}
