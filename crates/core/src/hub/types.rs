//! Types for model hub operations.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while talking to the model hub.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Not found on hub: {0}")]
    NotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HubError {
    /// Maps a reqwest transport error onto the hub taxonomy.
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HubError::Timeout
        } else if e.is_connect() {
            HubError::ConnectionFailed(e.to_string())
        } else {
            HubError::ApiError(e.to_string())
        }
    }
}

/// Transfers a named remote file into a local directory.
#[async_trait]
pub trait FetchService: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Download `filename` from repository `source` into `dir`.
    ///
    /// Returns the local path of the written file.
    async fn fetch(&self, source: &str, filename: &str, dir: &Path) -> Result<PathBuf, HubError>;
}

/// Enumerates the files contained in a repository.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// List every filename in repository `source`, in hub order.
    async fn list_files(&self, source: &str) -> Result<Vec<String>, HubError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_error_display() {
        let err = HubError::HttpStatus {
            status: 404,
            url: "https://hub.example/a/b".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 from https://hub.example/a/b");
        assert_eq!(HubError::Timeout.to_string(), "Request timeout");
    }

    #[test]
    fn test_hub_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: HubError = io.into();
        assert!(matches!(err, HubError::Io(_)));
    }
}
