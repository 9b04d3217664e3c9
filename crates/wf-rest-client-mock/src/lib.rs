//! Mock workflow client with canned responses
//!
//! Implements [`WorkflowApi`] without touching the network, for UI code and
//! tests that need deterministic data.

use async_trait::async_trait;
use serde_json::json;
use wf_api_contract::{
    StepStatus, WorkflowExecuteRequest, WorkflowState, WorkflowStatus, WorkflowStep,
};
use wf_client_api::{ClientApiResult, WorkflowApi};

#[derive(Debug, Default)]
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorkflowApi for MockClient {
    async fn execute_workflow(
        &self,
        request: &WorkflowExecuteRequest,
    ) -> ClientApiResult<WorkflowState> {
        Ok(WorkflowState {
            status: WorkflowStatus::Completed,
            steps: vec![
                WorkflowStep {
                    id: "plan".into(),
                    name: "Plan".into(),
                    status: StepStatus::Completed,
                    detail: None,
                    started_at: None,
                    finished_at: None,
                },
                WorkflowStep {
                    id: "run".into(),
                    name: "Run".into(),
                    status: StepStatus::Completed,
                    detail: Some(format!("input: {}", request.user_input)),
                    started_at: None,
                    finished_at: None,
                },
            ],
            logs: vec![
                "planning".to_string(),
                "running".to_string(),
                "done".to_string(),
            ],
            result: Some(json!({ "echo": request.user_input })),
        })
    }

    async fn tools_status(&self) -> ClientApiResult<serde_json::Value> {
        Ok(json!({
            "tools": [
                { "name": "weather", "status": "available" }
            ]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_completes_any_input() {
        let client: &dyn WorkflowApi = &MockClient::new();
        let request = WorkflowExecuteRequest::new("demo", None);

        let state = client.execute_workflow(&request).await.unwrap();
        assert_eq!(state.status, WorkflowStatus::Completed);
        assert_eq!(state.result, Some(json!({ "echo": "demo" })));
    }

    #[tokio::test]
    async fn mock_reports_tools() {
        let client = MockClient::new();
        let tools = client.tools_status().await.unwrap();
        assert_eq!(tools["tools"][0]["name"], "weather");
    }
}
