//! Errors raised once a request has been attempted.

/// What can go wrong talking to the crypto service.
///
/// None of these are fatal; the UI turns each one into a message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got an HTTP response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status, with the server's `message` when it sent one.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    /// 2xx, but the body did not report `success: true`.
    #[error("operation was not successful")]
    Rejected,
    /// 2xx, but the body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The text a non-2xx response is described by: the server's message or
    /// `HTTP {status}`.
    pub fn status_text(&self) -> Option<String> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.clone()),
            ApiError::Status { status, .. } => Some(format!("HTTP {status}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_prefers_server_message() {
        let err = ApiError::Status {
            status: 403,
            message: Some("Forbidden origin".to_string()),
        };
        assert_eq!(err.status_text().as_deref(), Some("Forbidden origin"));

        let err = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.status_text().as_deref(), Some("HTTP 502"));
        assert_eq!(err.to_string(), "HTTP 502: no message");

        assert!(ApiError::Rejected.status_text().is_none());
    }
}
