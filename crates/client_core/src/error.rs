use thiserror::Error;

/// Failure surface for backend API calls.
///
/// `Backend` carries the text the status banner shows: the body's
/// `error` field when the backend sent one, otherwise a generic
/// status-code line.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status for backend rejections; `None` for transport and
    /// decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}
