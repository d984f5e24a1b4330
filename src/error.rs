use thiserror::Error;

use crate::api::error::ApiError;

#[derive(Error, Debug)]
pub enum SlaError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid status filter '{0}'")]
    InvalidFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    // Backend errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("malformed response from {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of failures.
///
/// Transport, status and decoding failures are all handled the same way by
/// the dashboard components; the kind only matters for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    HttpStatus,
    Malformed,
    Local,
}

impl SlaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SlaError::Http(e) if e.is_decode() => ErrorKind::Malformed,
            SlaError::Http(e) if e.is_status() => ErrorKind::HttpStatus,
            SlaError::Http(_) => ErrorKind::Transport,
            SlaError::Api(_) | SlaError::TicketNotFound(_) => ErrorKind::HttpStatus,
            SlaError::Malformed { .. } | SlaError::Json(_) => ErrorKind::Malformed,
            _ => ErrorKind::Local,
        }
    }

    /// True for failures that originate from the backend rather than local state.
    pub fn is_remote(&self) -> bool {
        self.kind() != ErrorKind::Local
    }
}

pub type Result<T> = std::result::Result<T, SlaError>;
