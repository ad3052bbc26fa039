//! Error types for the comment form and its submission

use serde::Deserialize;
use thiserror::Error;

/// Local validation failures; the form stays open
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Missing required fields")]
    MissingFields,
}

/// Failures of a submitted rating entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// No response was received
    #[error("{0}")]
    Transport(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl SubmissionError {
    /// Build a rejection from a response status and its raw body.
    ///
    /// The body is expected to be `{"message": "..."}`; anything else falls
    /// back to a generic text carrying the status code.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| format!("Request failed with status {status}"));
        SubmissionError::Rejected { status, message }
    }

    /// Text shown to the user
    pub fn user_message(&self) -> &str {
        match self {
            SubmissionError::Rejected { message, .. } => message,
            SubmissionError::Transport(message) => message,
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(format!("Could not reach the rating service: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_message() {
        assert_eq!(FormError::MissingFields.to_string(), "Missing required fields");
    }

    #[test]
    fn test_rejected_uses_body_message() {
        let err = SubmissionError::rejected(400, r#"{"message":"Duplicate comment"}"#);
        assert_eq!(
            err,
            SubmissionError::Rejected {
                status: 400,
                message: "Duplicate comment".to_string()
            }
        );
        assert_eq!(err.user_message(), "Duplicate comment");
        assert_eq!(err.to_string(), "Duplicate comment");
    }

    #[test]
    fn test_rejected_ignores_extra_fields() {
        let err = SubmissionError::rejected(403, r#"{"result":"error","message":"Forbidden"}"#);
        assert_eq!(err.user_message(), "Forbidden");
    }

    #[test]
    fn test_rejected_without_message_falls_back() {
        let err = SubmissionError::rejected(500, "<html>Server Error</html>");
        assert_eq!(err.user_message(), "Request failed with status 500");

        let err = SubmissionError::rejected(422, r#"{"detail":"nope"}"#);
        assert_eq!(err.user_message(), "Request failed with status 422");
    }

    #[test]
    fn test_transport_message() {
        let err = SubmissionError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }
}
