//! Error and result types shared across the crate.
//!
//! Every failure of the user API collapses into [`ApiError`]. The repository
//! turns it into a banner message, so none of these variants are shown to the
//! user verbatim; they end up in the log file.

use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a single request against the users endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("invalid response payload: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}
