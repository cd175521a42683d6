use std::fmt;

/// Why an exchange did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The server answered with a non-success status.
    Status(u16),
    /// No usable response (network error, aborted request, CORS rejection).
    Transport(String),
}

/// Rejection value of a submission.
///
/// `body` carries the response text when the server sent a non-empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeFailure {
    pub kind: FailureKind,
    pub body: Option<String>,
}

impl ExchangeFailure {
    pub fn status(code: u16, body: Option<String>) -> Self {
        Self {
            kind: FailureKind::Status(code),
            body: body.filter(|text| !text.is_empty()),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport(message.into()),
            body: None,
        }
    }

    /// The response body, or `None` when the failure carried no text.
    pub fn reason(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl fmt::Display for ExchangeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FailureKind::Status(code) => write!(f, "Request failed with status {code}"),
            FailureKind::Transport(msg) => write!(f, "Request failed: {msg}"),
        }
    }
}

impl std::error::Error for ExchangeFailure {}

/// Errors raised while binding to a form.
#[derive(Debug, Clone)]
pub enum SubmissionError {
    SurfaceUnavailable(String),
    ListenerFailed(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::SurfaceUnavailable(msg) => write!(f, "Form unavailable: {msg}"),
            SubmissionError::ListenerFailed(msg) => {
                write!(f, "Failed to listen for submit events: {msg}")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

impl SubmissionError {
    pub fn surface_unavailable(message: impl Into<String>) -> Self {
        SubmissionError::SurfaceUnavailable(message.into())
    }

    pub fn listener_failed(message: impl Into<String>) -> Self {
        SubmissionError::ListenerFailed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_no_reason() {
        let failure = ExchangeFailure::status(500, Some(String::new()));
        assert_eq!(failure.reason(), None);
    }

    #[test]
    fn test_status_body_is_reason() {
        let failure = ExchangeFailure::status(422, Some("invalid input".to_string()));
        assert_eq!(failure.reason(), Some("invalid input"));
        assert_eq!(failure.to_string(), "Request failed with status 422");
    }

    #[test]
    fn test_transport_failure_has_no_reason() {
        let failure = ExchangeFailure::transport("connection refused");
        assert_eq!(failure.reason(), None);
        assert_eq!(failure.kind, FailureKind::Transport("connection refused".into()));
    }
}
