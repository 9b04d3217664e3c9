//! Workflow orchestration REST API contract types and validation
//!
//! This crate defines the schema types shared between the mock server,
//! production backend, and REST client implementations: the `{code, message,
//! data}` response envelope, the workflow state record, and the execute
//! request payload.

pub mod types;
pub mod validation;
pub mod error;

pub use types::*;
pub use error::*;
