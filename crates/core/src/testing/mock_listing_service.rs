//! Mock listing service for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::hub::{HubError, ListingService};

/// Mock implementation of the ListingService trait.
///
/// Sources without configured files or failures are reported as not found.
#[derive(Debug, Default)]
pub struct MockListingService {
    /// Recorded sources, in call order.
    calls: Arc<RwLock<Vec<String>>>,
    /// Filenames per source.
    files: Arc<RwLock<HashMap<String, Vec<String>>>>,
    /// Error messages per source.
    failures: Arc<RwLock<HashMap<String, String>>>,
}

impl MockListingService {
    /// Create a new mock listing service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filenames returned for `source`.
    pub async fn set_files(&self, source: &str, files: &[&str]) {
        self.files.write().await.insert(
            source.to_string(),
            files.iter().map(|f| f.to_string()).collect(),
        );
    }

    /// Fail every listing of `source` with an API error carrying `message`.
    pub async fn fail_on(&self, source: &str, message: &str) {
        self.failures
            .write()
            .await
            .insert(source.to_string(), message.to_string());
    }

    /// Get all listed sources, in call order.
    pub async fn recorded_sources(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl ListingService for MockListingService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_files(&self, source: &str) -> Result<Vec<String>, HubError> {
        self.calls.write().await.push(source.to_string());

        if let Some(message) = self.failures.read().await.get(source) {
            return Err(HubError::ApiError(message.clone()));
        }

        self.files
            .read()
            .await
            .get(source)
            .cloned()
            .ok_or_else(|| HubError::NotFound(source.to_string()))
    }
}
