//! API contract types for the workflow orchestration REST service

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::error::ApiContractError;

/// Envelope `code` value that signals application-level success.
pub const ENVELOPE_SUCCESS: u16 = 200;

/// Workflow lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Idle,
    Running,
    Completed,
    Failed,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Idle => "idle",
            WorkflowStatus::Running => "running",
            WorkflowStatus::Completed => "completed",
            WorkflowStatus::Failed => "failed",
        }
    }
}

impl FromStr for WorkflowStatus {
    type Err = ApiContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(WorkflowStatus::Idle),
            "running" => Ok(WorkflowStatus::Running),
            "completed" => Ok(WorkflowStatus::Completed),
            "failed" => Ok(WorkflowStatus::Failed),
            other => Err(ApiContractError::InvalidWorkflowStatus(other.to_string())),
        }
    }
}

/// Per-step lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// A single step of a workflow execution as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(rename = "startedAt", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt", skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Snapshot of a workflow execution.
///
/// Owned by the caller after a client call returns; the client never retains
/// it. `steps` and `logs` default to empty so partial backend payloads still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub status: WorkflowStatus,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl WorkflowState {
    /// Synthetic state emitted before any network activity, so callers can
    /// render a loading view without waiting on I/O.
    pub fn started() -> Self {
        Self {
            status: WorkflowStatus::Running,
            steps: Vec::new(),
            logs: Vec::new(),
            result: None,
        }
    }

    /// Terminal state emitted on every failure path.
    pub fn terminal_failure() -> Self {
        Self {
            status: WorkflowStatus::Failed,
            steps: Vec::new(),
            logs: Vec::new(),
            result: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            WorkflowStatus::Completed | WorkflowStatus::Failed
        )
    }
}

/// Workflow execution request
///
/// `conversation_id` serializes as an explicit `null` when absent; the
/// backend distinguishes "no conversation" from a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WorkflowExecuteRequest {
    #[serde(rename = "userInput")]
    #[validate(length(min = 1, message = "User input cannot be empty"))]
    pub user_input: String,
    #[serde(rename = "conversationId")]
    pub conversation_id: Option<String>,
}

impl WorkflowExecuteRequest {
    pub fn new(user_input: impl Into<String>, conversation_id: Option<String>) -> Self {
        Self {
            user_input: user_input.into(),
            conversation_id,
        }
    }
}

/// The `{code, message, data}` wrapper all backend responses share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == ENVELOPE_SUCCESS
    }
}

impl ApiEnvelope<serde_json::Value> {
    /// Deserialize the opaque `data` payload into a concrete contract type.
    pub fn decode_data<T: DeserializeOwned>(self) -> Result<T, ApiContractError> {
        Ok(serde_json::from_value(self.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_status_round_trips_from_str() {
        for status in [
            WorkflowStatus::Idle,
            WorkflowStatus::Running,
            WorkflowStatus::Completed,
            WorkflowStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<WorkflowStatus>().unwrap(), status);
        }
    }

    #[test]
    fn workflow_status_rejects_unknown() {
        let err = "exploded".parse::<WorkflowStatus>().unwrap_err();
        assert!(matches!(
            err,
            ApiContractError::InvalidWorkflowStatus(ref s) if s == "exploded"
        ));
    }

    #[test]
    fn execute_request_serializes_null_conversation_id() {
        let request = WorkflowExecuteRequest::new("deploy the thing", None);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["userInput"], "deploy the thing");
        assert!(json["conversationId"].is_null());
        assert!(json.as_object().unwrap().contains_key("conversationId"));
    }

    #[test]
    fn execute_request_serializes_camel_case_names() {
        let request =
            WorkflowExecuteRequest::new("hello", Some("conv-42".to_string()));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["conversationId"], "conv-42");
        assert!(json.get("user_input").is_none());
    }

    #[test]
    fn workflow_state_defaults_missing_collections() {
        let state: WorkflowState = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert_eq!(state.status, WorkflowStatus::Completed);
        assert!(state.steps.is_empty());
        assert!(state.logs.is_empty());
        assert!(state.result.is_none());
    }

    #[test]
    fn started_state_is_running_and_empty() {
        let state = WorkflowState::started();
        assert_eq!(state.status, WorkflowStatus::Running);
        assert!(state.steps.is_empty());
        assert!(state.logs.is_empty());
        assert!(state.result.is_none());
        assert!(!state.is_terminal());
    }

    #[test]
    fn terminal_failure_state_is_failed() {
        let state = WorkflowState::terminal_failure();
        assert_eq!(state.status, WorkflowStatus::Failed);
        assert!(state.is_terminal());
    }

    #[test]
    fn envelope_success_predicate() {
        let ok = ApiEnvelope {
            code: 200,
            message: "ok".to_string(),
            data: serde_json::json!({}),
        };
        assert!(ok.is_success());

        let bad = ApiEnvelope {
            code: 500,
            message: "bad input".to_string(),
            data: serde_json::Value::Null,
        };
        assert!(!bad.is_success());
    }

    #[test]
    fn envelope_decodes_workflow_state_data() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(
            r#"{
                "code": 200,
                "message": "ok",
                "data": {
                    "status": "completed",
                    "steps": [{"id": "s1", "name": "plan", "status": "completed"}],
                    "logs": ["planned"],
                    "result": {"answer": 42}
                }
            }"#,
        )
        .unwrap();

        let state: WorkflowState = envelope.decode_data().unwrap();
        assert_eq!(state.status, WorkflowStatus::Completed);
        assert_eq!(state.steps.len(), 1);
        assert_eq!(state.steps[0].name, "plan");
        assert_eq!(state.logs, vec!["planned".to_string()]);
        assert_eq!(state.result, Some(serde_json::json!({"answer": 42})));
    }
}
