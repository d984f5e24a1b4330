//! Status errors returned by the SLA backend.

use std::fmt;

use reqwest::StatusCode;

/// A non-success HTTP response.
///
/// Keeps the status and the request path so log lines point at the endpoint
/// that failed. The response body, when readable, becomes the message.
#[derive(Debug)]
pub struct ApiError {
    /// Request path, e.g. `/tickets`
    pub path: String,
    /// HTTP status code
    pub status: StatusCode,
    /// Backend-provided detail, if any
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(path: impl Into<String>, status: StatusCode) -> Self {
        Self {
            path: path.into(),
            status,
            message: None,
        }
    }

    /// Attach the backend's error detail.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.message = Some(message);
        }
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = self.status.canonical_reason().unwrap_or("Unknown");
        write!(
            f,
            "backend returned {} {} for {}",
            self.status.as_u16(),
            reason,
            self.path
        )?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Pull the `error` field out of a JSON error body, falling back to the raw text.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_and_path() {
        let err = ApiError::new("/search", StatusCode::BAD_REQUEST)
            .with_message("Missing search query");
        assert_eq!(
            err.to_string(),
            "backend returned 400 Bad Request for /search: Missing search query"
        );
    }

    #[test]
    fn test_blank_message_ignored() {
        let err = ApiError::new("/tickets", StatusCode::INTERNAL_SERVER_ERROR).with_message("  ");
        assert!(err.message.is_none());
        assert!(err.is_server_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error": "Ticket not found"}"#),
            "Ticket not found"
        );
        assert_eq!(extract_error_message("plain failure\n"), "plain failure");
    }
}
