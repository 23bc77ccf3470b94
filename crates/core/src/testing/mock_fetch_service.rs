//! Mock fetch service for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::hub::{FetchService, HubError};

/// Size written for files without an explicit size.
const DEFAULT_FILE_SIZE: u64 = 1024;

/// A recorded fetch call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFetch {
    pub source: String,
    pub filename: String,
    pub dir: PathBuf,
}

/// Mock implementation of the FetchService trait.
///
/// Provides controllable behavior for testing:
/// - Track fetch calls for assertions
/// - Write files of a chosen size into the target directory
/// - Fail specific filenames
/// - Report success without writing the file
///
/// # Example
///
/// ```rust,ignore
/// let fetcher = Arc::new(MockFetchService::new());
/// fetcher.set_file_size("a.gguf", 100).await;
/// fetcher.fail_on("b.gguf", "connection reset").await;
///
/// let orchestrator = DownloadOrchestrator::new(fetcher.clone());
/// orchestrator.run(&tasks, &mut out).await?;
///
/// assert_eq!(fetcher.fetch_count().await, 2);
/// ```
#[derive(Debug, Default)]
pub struct MockFetchService {
    /// Recorded fetch calls.
    calls: Arc<RwLock<Vec<RecordedFetch>>>,
    /// Bytes to write per filename.
    sizes: Arc<RwLock<HashMap<String, u64>>>,
    /// Error messages per filename.
    failures: Arc<RwLock<HashMap<String, String>>>,
    /// Filenames reported as fetched without a file on disk.
    phantom: Arc<RwLock<HashSet<String>>>,
}

impl MockFetchService {
    /// Create a new mock fetch service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `size` bytes when `filename` is fetched.
    pub async fn set_file_size(&self, filename: &str, size: u64) {
        self.sizes.write().await.insert(filename.to_string(), size);
    }

    /// Fail every fetch of `filename` with an API error carrying `message`.
    pub async fn fail_on(&self, filename: &str, message: &str) {
        self.failures
            .write()
            .await
            .insert(filename.to_string(), message.to_string());
    }

    /// Return a path for `filename` without creating the file.
    pub async fn report_without_writing(&self, filename: &str) {
        self.phantom.write().await.insert(filename.to_string());
    }

    /// Get all recorded fetch calls.
    pub async fn recorded_fetches(&self) -> Vec<RecordedFetch> {
        self.calls.read().await.clone()
    }

    /// Get the number of fetch calls made.
    pub async fn fetch_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl FetchService for MockFetchService {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, source: &str, filename: &str, dir: &Path) -> Result<PathBuf, HubError> {
        self.calls.write().await.push(RecordedFetch {
            source: source.to_string(),
            filename: filename.to_string(),
            dir: dir.to_path_buf(),
        });

        if let Some(message) = self.failures.read().await.get(filename) {
            return Err(HubError::ApiError(message.clone()));
        }

        let path = dir.join(filename);
        if self.phantom.read().await.contains(filename) {
            return Ok(path);
        }

        let size = self
            .sizes
            .read()
            .await
            .get(filename)
            .copied()
            .unwrap_or(DEFAULT_FILE_SIZE);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, vec![0u8; size as usize]).await?;

        Ok(path)
    }
}
