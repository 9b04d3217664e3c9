//! REST API client for the workflow orchestration service
//!
//! This crate provides the HTTP client for the workflow backend: a single
//! `POST /api/workflow/execute` call with callback-based state updates, and
//! a `GET /api/tools/status` probe. Responses share a `{code, message, data}`
//! envelope that is validated here before `data` is handed to the caller.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

use async_trait::async_trait;
use wf_api_contract::{WorkflowExecuteRequest, WorkflowState};
use wf_client_api::{ClientApiError, ClientApiResult, WorkflowApi};

#[async_trait]
impl WorkflowApi for client::WorkflowClient {
    async fn execute_workflow(
        &self,
        request: &WorkflowExecuteRequest,
    ) -> ClientApiResult<WorkflowState> {
        self.execute_workflow(
            &request.user_input,
            request.conversation_id.as_deref(),
        )
        .await
        .map_err(|e| ClientApiError::Server(e.to_string()))
    }

    async fn tools_status(&self) -> ClientApiResult<serde_json::Value> {
        self.tools_status()
            .await
            .map_err(|e| ClientApiError::Server(e.to_string()))
    }
}
