//! In-process mock of the workflow backend.
//!
//! Serves the same two routes as the real service and lets tests choose how
//! the execute route behaves: a canned success, a raw HTTP error, or a 2xx
//! response whose envelope signals failure. The last execute request body is
//! captured verbatim so tests can assert on the wire format.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use wf_api_contract::{
    ApiEnvelope, StepStatus, WorkflowState, WorkflowStatus, WorkflowStep, ENVELOPE_SUCCESS,
};

/// How the execute route responds.
#[derive(Debug, Clone)]
pub enum ExecuteBehavior {
    /// 200 with a success envelope wrapping a completed workflow state.
    Success,
    /// Raw HTTP error status with a plain-text body.
    HttpError(StatusCode),
    /// 200 with a failure envelope and null data.
    EnvelopeError { code: u16, message: String },
}

pub struct MockBackend {
    behavior: ExecuteBehavior,
    last_execute_body: Mutex<Option<Value>>,
}

impl MockBackend {
    pub fn new(behavior: ExecuteBehavior) -> Self {
        Self {
            behavior,
            last_execute_body: Mutex::new(None),
        }
    }

    /// The JSON body of the most recent execute request, exactly as received.
    pub fn last_execute_body(&self) -> Option<Value> {
        self.last_execute_body.lock().unwrap().clone()
    }
}

pub fn app(backend: Arc<MockBackend>) -> Router {
    Router::new()
        .route("/api/workflow/execute", post(execute_workflow))
        .route("/api/tools/status", get(tools_status))
        .with_state(backend)
}

/// Bind an ephemeral port, serve the mock in a background task, and return
/// the bound address.
pub async fn spawn(backend: Arc<MockBackend>) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let router = app(backend);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(addr)
}

/// The canned completed state the success behavior returns.
pub fn completed_state(user_input: &str) -> WorkflowState {
    let now = Utc::now();
    WorkflowState {
        status: WorkflowStatus::Completed,
        steps: vec![WorkflowStep {
            id: "step-1".to_string(),
            name: "execute".to_string(),
            status: StepStatus::Completed,
            detail: Some(format!("handled: {user_input}")),
            started_at: Some(now),
            finished_at: Some(now),
        }],
        logs: vec![
            format!("received input: {user_input}"),
            "workflow finished".to_string(),
        ],
        result: Some(json!({ "summary": format!("done: {user_input}") })),
    }
}

/// The canned tools payload the status route returns.
pub fn tools_payload() -> Value {
    json!({
        "tools": [
            { "name": "weather", "status": "available" },
            { "name": "search", "status": "available" }
        ]
    })
}

async fn execute_workflow(
    State(backend): State<Arc<MockBackend>>,
    Json(body): Json<Value>,
) -> Response {
    *backend.last_execute_body.lock().unwrap() = Some(body.clone());

    match &backend.behavior {
        ExecuteBehavior::HttpError(status) => {
            (*status, "internal error".to_string()).into_response()
        }
        ExecuteBehavior::EnvelopeError { code, message } => Json(ApiEnvelope {
            code: *code,
            message: message.clone(),
            data: Value::Null,
        })
        .into_response(),
        ExecuteBehavior::Success => {
            let user_input = body
                .get("userInput")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            Json(ApiEnvelope {
                code: ENVELOPE_SUCCESS,
                message: "ok".to_string(),
                data: completed_state(&user_input),
            })
            .into_response()
        }
    }
}

async fn tools_status() -> Json<ApiEnvelope<Value>> {
    Json(ApiEnvelope {
        code: ENVELOPE_SUCCESS,
        message: "ok".to_string(),
        data: tools_payload(),
    })
}
