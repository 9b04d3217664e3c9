//! Validation helpers for API contract types

use crate::error::ApiContractError;
use crate::types::WorkflowExecuteRequest;
use validator::Validate;

/// Validate a workflow execute request before it is put on the wire.
///
/// Whitespace-only input counts as empty; the backend treats it the same way.
pub fn validate_execute_request(
    request: &WorkflowExecuteRequest,
) -> Result<(), ApiContractError> {
    request.validate()?;

    if request.user_input.trim().is_empty() {
        return Err(ApiContractError::Validation(
            validator::ValidationErrors::new(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_execute_request_valid() {
        let request = WorkflowExecuteRequest::new("check the weather in Oslo", None);
        assert!(validate_execute_request(&request).is_ok());
    }

    #[test]
    fn test_validate_execute_request_empty_input() {
        let request = WorkflowExecuteRequest::new("", Some("conv-1".to_string()));
        assert!(validate_execute_request(&request).is_err());
    }

    #[test]
    fn test_validate_execute_request_whitespace_input() {
        let request = WorkflowExecuteRequest::new("   \n\t", None);
        assert!(validate_execute_request(&request).is_err());
    }
}
