//! Error types for the REST API client

use reqwest::StatusCode;
use thiserror::Error;
use wf_api_contract::ApiContractError;

/// Errors that can occur when using the REST API client
///
/// The backend funnels everything through a single result; `Transport` covers
/// non-2xx HTTP statuses and `Application` covers a 2xx response whose
/// envelope signals failure.
#[derive(Debug, Error)]
pub enum RestClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("API contract error: {0}")]
    ApiContract(#[from] ApiContractError),

    #[error("Server returned error status {status}: {body}")]
    Transport { status: StatusCode, body: String },

    #[error("Backend reported failure (code {code}): {message}")]
    Application { code: u16, message: String },
}

/// Result type alias for REST client operations
pub type RestClientResult<T> = Result<T, RestClientError>;
