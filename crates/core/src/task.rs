//! Download task definition.

use std::path::{Path, PathBuf};

/// One unit of work for the orchestrator: a remote file and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    /// Repository identifier on the Hub (e.g. "owner/name").
    pub source: String,
    /// File name inside the repository.
    pub filename: String,
    /// Local directory the file is written into.
    pub local_dir: PathBuf,
    /// Human-readable label used in progress output.
    pub label: String,
}

impl DownloadTask {
    pub fn new(
        source: impl Into<String>,
        filename: impl Into<String>,
        local_dir: impl Into<PathBuf>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            filename: filename.into(),
            local_dir: local_dir.into(),
            label: label.into(),
        }
    }

    /// Path the file occupies once downloaded.
    pub fn target_path(&self) -> PathBuf {
        self.local_dir.join(&self.filename)
    }

    /// Same task rooted under another directory.
    pub fn rooted_at(&self, root: &Path) -> Self {
        Self {
            local_dir: root.join(&self.local_dir),
            ..self.clone()
        }
    }
}
