//! Main REST API client implementation

use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use wf_api_contract::validation::validate_execute_request;
use wf_api_contract::{ApiEnvelope, WorkflowExecuteRequest, WorkflowState};

use crate::error::{RestClientError, RestClientResult};

const EXECUTE_PATH: &str = "/api/workflow/execute";
const TOOLS_STATUS_PATH: &str = "/api/tools/status";

/// REST API client for the workflow orchestration service
///
/// Stateless between calls: each operation is a single request/response
/// round-trip, so the client may be cloned and shared across tasks freely.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    http_client: HttpClient,
    base_url: Url,
}

impl WorkflowClient {
    /// Create a new client
    pub fn new(base_url: Url) -> Self {
        let http_client = HttpClient::builder()
            .user_agent("wf-rest-client/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url,
        }
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str) -> RestClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self::new(base_url))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute a workflow from free-text input and return its final state.
    ///
    /// Callback-free convenience over [`execute_workflow_with_updates`].
    ///
    /// [`execute_workflow_with_updates`]: Self::execute_workflow_with_updates
    pub async fn execute_workflow(
        &self,
        user_input: &str,
        conversation_id: Option<&str>,
    ) -> RestClientResult<WorkflowState> {
        self.execute_workflow_with_updates(user_input, conversation_id, |_| {})
            .await
    }

    /// Execute a workflow, reporting intermediate state to `on_update`.
    ///
    /// `on_update` fires with a synthetic `running` state before any network
    /// activity (so callers can render a loading view immediately), then once
    /// more with the outcome: the backend's final state on success, or a
    /// terminal `failed` state on every failure path. The error is still
    /// returned after the terminal update.
    pub async fn execute_workflow_with_updates<F>(
        &self,
        user_input: &str,
        conversation_id: Option<&str>,
        mut on_update: F,
    ) -> RestClientResult<WorkflowState>
    where
        F: FnMut(&WorkflowState),
    {
        on_update(&WorkflowState::started());

        match self.try_execute_workflow(user_input, conversation_id).await {
            Ok(state) => {
                on_update(&state);
                Ok(state)
            }
            Err(err) => {
                warn!("workflow execution failed: {err}");
                on_update(&WorkflowState::terminal_failure());
                Err(err)
            }
        }
    }

    async fn try_execute_workflow(
        &self,
        user_input: &str,
        conversation_id: Option<&str>,
    ) -> RestClientResult<WorkflowState> {
        let request =
            WorkflowExecuteRequest::new(user_input, conversation_id.map(str::to_string));
        validate_execute_request(&request)?;

        self.post(EXECUTE_PATH, &request).await
    }

    /// Fetch the backend tool availability report.
    ///
    /// The payload shape is owned by the backend; it is returned as opaque
    /// JSON after envelope validation.
    pub async fn tools_status(&self) -> RestClientResult<serde_json::Value> {
        self.get(TOOLS_STATUS_PATH).await
    }

    // Private helper methods

    async fn get<T: DeserializeOwned>(&self, path: &str) -> RestClientResult<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> RestClientResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn request<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> RestClientResult<T> {
        let url = self.base_url.join(path)?;
        debug!(%method, %url, "dispatching API request");

        let mut request = self.http_client.request(method, url);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Validate the HTTP status and the `{code, message, data}` envelope,
    /// then decode `data`.
    ///
    /// The envelope is parsed with an opaque `data` first: a failure envelope
    /// may carry `data: null`, which must surface as an `Application` error
    /// rather than a decode error.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> RestClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RestClientError::Transport { status, body: text });
        }

        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(&text)?;
        if !envelope.is_success() {
            return Err(RestClientError::Application {
                code: envelope.code,
                message: envelope.message,
            });
        }

        Ok(envelope.decode_data()?)
    }
}
