use thiserror::Error;

/// Longest slice of an error body kept for display
const MAX_BODY_PREVIEW: usize = 200;

/// Failure categories for a backend fetch.
///
/// Screens reduce every variant to the same errored view; only the message
/// text differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No bearer token in local storage
    #[error("You are not signed in. Sign in on the mobile app or set a token, then retry.")]
    MissingCredential,
    /// Connection, DNS, TLS or timeout failure
    #[error("Could not reach the server: {0}")]
    Transport(String),
    /// Non-2xx HTTP status
    #[error("Server returned HTTP {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },
    /// The success envelope carried `isSuccess: false`
    #[error("{message}")]
    Rejected { message: String },
    /// The body could not be decoded into the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

fn body_suffix(body: &str) -> String {
    if body.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", body.trim())
    }
}

impl FetchError {
    /// Build a `Status` error, trimming long bodies (HTML error pages etc.)
    pub fn status(status: u16, body: &str) -> Self {
        let body: String = body.chars().take(MAX_BODY_PREVIEW).collect();
        FetchError::Status { status, body }
    }

    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }

    /// Short category name for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::MissingCredential => "credential",
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "http-status",
            FetchError::Rejected { .. } => "rejected",
            FetchError::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_body() {
        let err = FetchError::status(503, "maintenance");
        assert_eq!(err.to_string(), "Server returned HTTP 503: maintenance");
    }

    #[test]
    fn test_status_message_without_body() {
        let err = FetchError::status(401, "   ");
        assert_eq!(err.to_string(), "Server returned HTTP 401");
    }

    #[test]
    fn test_status_body_is_truncated() {
        let long = "x".repeat(1000);
        match FetchError::status(500, &long) {
            FetchError::Status { body, .. } => assert_eq!(body.len(), MAX_BODY_PREVIEW),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rejected_uses_backend_message() {
        let err = FetchError::Rejected {
            message: "No requests for this account".to_string(),
        };
        assert_eq!(err.to_string(), "No requests for this account");
        assert_eq!(err.kind(), "rejected");
    }
}
