use shared::error::ErrorCode;
use thiserror::Error;

/// Failure talking to the posts API.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid api base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl BackendError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBaseUrl { .. } => ErrorCode::Validation,
            Self::Transport(_) => ErrorCode::Transport,
            Self::Status { status, .. } => ErrorCode::from_status(*status),
        }
    }
}

/// Failure of a view handler. Validation failures never reach the network.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("no {0} is being edited")]
    NotEditing(&'static str),
    #[error("{kind} {id} is not in the current view")]
    UnknownRecord { kind: &'static str, id: i64 },
    #[error(transparent)]
    Backend(#[from] BackendError),
}
