//! Client API trait for workflow UIs
//!
//! Frontends program against this trait so the REST client and the canned
//! mock are interchangeable.

use async_trait::async_trait;
use thiserror::Error;
use wf_api_contract::{WorkflowExecuteRequest, WorkflowState};

#[derive(Debug, Error)]
pub enum ClientApiError {
    #[error("server error: {0}")]
    Server(String),
    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub type ClientApiResult<T> = Result<T, ClientApiError>;

#[async_trait]
pub trait WorkflowApi: Send + Sync {
    /// Execute a workflow from free-text input and return its final state.
    async fn execute_workflow(
        &self,
        request: &WorkflowExecuteRequest,
    ) -> ClientApiResult<WorkflowState>;

    /// Fetch the backend tool availability report as an opaque JSON value.
    async fn tools_status(&self) -> ClientApiResult<serde_json::Value>;
}
