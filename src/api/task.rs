//! Task Endpoints
//!
//! Every mutation is fire-and-refetch: callers reload the list afterwards.

use reqwest::Method;
use serde::de::IgnoredAny;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Filter, Task, TaskInput, TaskListResponse, TaskPatch};

impl ApiClient {
    async fn list(&self, endpoint: &str) -> Result<Vec<Task>, ApiError> {
        let response: Option<TaskListResponse> = self.request(Method::GET, endpoint, None).await?;
        Ok(response.map(Vec::from).unwrap_or_default())
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.list(Filter::All.endpoint()).await
    }

    pub async fn list_pending_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.list(Filter::Pending.endpoint()).await
    }

    pub async fn list_completed_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.list(Filter::Completed.endpoint()).await
    }

    /// List the slice of tasks selected by `filter`.
    pub async fn list_tasks_for(&self, filter: Filter) -> Result<Vec<Task>, ApiError> {
        match filter {
            Filter::All => self.list_tasks().await,
            Filter::Pending => self.list_pending_tasks().await,
            Filter::Completed => self.list_completed_tasks().await,
        }
    }

    /// `Ok(None)` when the server answered 2xx without a body.
    pub async fn get_task(&self, id: u32) -> Result<Option<Task>, ApiError> {
        self.request(Method::GET, &format!("/tasks/{id}/"), None).await
    }

    pub async fn create_task(&self, input: &TaskInput) -> Result<Option<Task>, ApiError> {
        self.request_json(Method::POST, "/tasks/", input).await
    }

    pub async fn update_task(&self, id: u32, patch: &TaskPatch) -> Result<Option<Task>, ApiError> {
        self.request_json(Method::PATCH, &format!("/tasks/{id}/"), patch).await
    }

    pub async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        let _: Option<IgnoredAny> = self.request(Method::DELETE, &format!("/tasks/{id}/"), None).await?;
        Ok(())
    }

    /// Flip `completed` server-side. Some servers answer 204, so the updated
    /// task is optional and callers re-fetch either way.
    pub async fn toggle_task(&self, id: u32) -> Result<Option<Task>, ApiError> {
        self.request(Method::POST, &format!("/tasks/{id}/toggle/"), None).await
    }

    /// Validate a task form and create (`target == None`) or update it.
    ///
    /// A blank title fails before any request is issued.
    pub async fn submit_task(
        &self,
        target: Option<u32>,
        title: &str,
        description: &str,
    ) -> Result<Option<Task>, ApiError> {
        let input = TaskInput::new(title, description)?;
        match target {
            None => self.create_task(&input).await,
            Some(id) => self.update_task(id, &TaskPatch::from(input)).await,
        }
    }
}
