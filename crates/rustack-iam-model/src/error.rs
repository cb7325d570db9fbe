//! IAM service error responses.

use serde::{Deserialize, Serialize};

/// Fault classification carried in `<Error><Type>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IamErrorType {
    /// The caller sent a bad request.
    Sender,
    /// The service failed.
    Receiver,
    /// Any other value, or no `<Type>` element.
    Unknown,
}

impl IamErrorType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sender => "Sender",
            Self::Receiver => "Receiver",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for IamErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for IamErrorType {
    fn from(s: &str) -> Self {
        match s {
            "Sender" => Self::Sender,
            "Receiver" => Self::Receiver,
            _ => Self::Unknown,
        }
    }
}

/// An IAM `<ErrorResponse>` decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("IamError({code}): {message}")]
pub struct IamServiceError {
    /// Sender or receiver fault.
    pub error_type: IamErrorType,
    /// The error code, e.g. `NoSuchEntity`.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
    /// The request ID.
    pub request_id: Option<String>,
    /// The HTTP status code of the response.
    pub status_code: http::StatusCode,
}

impl IamServiceError {
    /// Create a new error from a code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: IamErrorType::Sender,
            code: code.into(),
            message: message.into(),
            request_id: None,
            status_code: http::StatusCode::BAD_REQUEST,
        }
    }

    /// Set the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Set the request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Whether the fault lies with the service rather than the caller.
    #[must_use]
    pub fn is_server_fault(&self) -> bool {
        self.error_type == IamErrorType::Receiver || self.status_code.is_server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_code_and_message() {
        let err = IamServiceError::new("NoSuchEntity", "The organization was not found.");
        assert_eq!(
            err.to_string(),
            "IamError(NoSuchEntity): The organization was not found."
        );
        assert!(!err.is_server_fault());
    }

    #[test]
    fn test_should_classify_server_fault() {
        let err = IamServiceError::new("ServiceFailure", "boom")
            .with_status(http::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.is_server_fault());
    }

    #[test]
    fn test_should_parse_error_type() {
        assert_eq!(IamErrorType::from("Receiver"), IamErrorType::Receiver);
        assert_eq!(IamErrorType::from("bogus"), IamErrorType::Unknown);
    }
}
