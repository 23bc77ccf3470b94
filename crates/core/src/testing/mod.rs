//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the hub service traits,
//! allowing orchestrator and listing runs to be tested without a network.
//!
//! # Example
//!
//! ```rust,ignore
//! use modelfetch_core::testing::{MockFetchService, MockListingService};
//!
//! let fetcher = MockFetchService::new();
//! fetcher.set_file_size("model.gguf", 100).await;
//!
//! let lister = MockListingService::new();
//! lister.set_files("owner/repo", &["model.gguf", "README.md"]).await;
//! ```

mod mock_fetch_service;
mod mock_listing_service;

pub use mock_fetch_service::{MockFetchService, RecordedFetch};
pub use mock_listing_service::MockListingService;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::Path;

    use crate::task::DownloadTask;

    /// Create a task for `owner/<name>` whose directory lives under `root`.
    pub fn task(root: &Path, name: &str, filename: &str) -> DownloadTask {
        DownloadTask::new(
            format!("owner/{}", name),
            filename,
            root.join("models").join(name),
            format!("{} model", name),
        )
    }
}
