use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request was cancelled")]
    Cancelled,

    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported response content type: {0}")]
    UnsupportedContentType(String),

    #[error("Unexpected response status {status}: {}", message.as_deref().unwrap_or("no message"))]
    UnexpectedStatus {
        status: StatusCode,
        message: Option<String>,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The exchange did not complete: connection failure, timeout, cancellation.
    Transport,
    /// The body did not match the expected schema or encoding.
    Decode,
    /// The node answered with a status other than 2xx or 404.
    UnexpectedStatus,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) | Error::Cancelled | Error::DeadlineExceeded | Error::InvalidUrl(_) => {
                ErrorKind::Transport
            }
            Error::Json(_) | Error::UnsupportedContentType(_) => ErrorKind::Decode,
            Error::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
        }
    }

    /// If the error has a HTTP status code, return it.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http(err) => err.status(),
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Cancelled
            | Error::DeadlineExceeded
            | Error::InvalidUrl(_)
            | Error::Json(_)
            | Error::UnsupportedContentType(_) => None,
        }
    }
}
