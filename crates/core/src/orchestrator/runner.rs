//! Download orchestrator implementation.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::hub::FetchService;
use crate::report::format_size;
use crate::task::DownloadTask;

use super::types::{RunSummary, TaskFailure, TaskOutcome};

/// Size of the regular file at `path`, or `None` if there is none.
async fn existing_file_size(path: &Path) -> Option<u64> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => Some(metadata.len()),
        _ => None,
    }
}

/// Runs download tasks one after another against a fetch service.
///
/// Progress text goes to the `out` sink passed to each call; diagnostics go
/// through `tracing`. Errors returned from `run`/`process_task` are only ever
/// failures to write progress text; task failures are part of the outcome.
pub struct DownloadOrchestrator {
    fetcher: Arc<dyn FetchService>,
}

impl DownloadOrchestrator {
    pub fn new(fetcher: Arc<dyn FetchService>) -> Self {
        Self { fetcher }
    }

    /// Processes every task in order and returns the tally.
    pub async fn run<W: Write>(
        &self,
        tasks: &[DownloadTask],
        out: &mut W,
    ) -> io::Result<RunSummary> {
        let total = tasks.len();
        let mut summary = RunSummary::new(total);
        info!(tasks = total, fetcher = self.fetcher.name(), "Starting download run");

        for (i, task) in tasks.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "[{}/{}] Processing {}", i + 1, total, task.label)?;

            let outcome = self.process_task(task, out).await?;
            if !outcome.is_success() {
                writeln!(out, "❌ Failed to download {}", task.filename)?;
            }
            summary.record(outcome);
        }

        info!(
            succeeded = summary.succeeded,
            failed = summary.failed(),
            total_bytes = summary.total_bytes,
            "Download run finished"
        );
        Ok(summary)
    }

    /// Ensures the task's directory, then skips or fetches its file.
    pub async fn process_task<W: Write>(
        &self,
        task: &DownloadTask,
        out: &mut W,
    ) -> io::Result<TaskOutcome> {
        writeln!(out)?;
        writeln!(out, "📥 Downloading {}", task.label)?;
        writeln!(out, "   Repository: {}", task.source)?;
        writeln!(out, "   File: {}", task.filename)?;
        writeln!(out, "   Directory: {}", task.local_dir.display())?;

        if let Err(e) = fs::create_dir_all(&task.local_dir).await {
            warn!(dir = %task.local_dir.display(), error = %e, "Failed to create directory");
            let failure = TaskFailure::Directory {
                path: task.local_dir.clone(),
                source: e,
            };
            writeln!(out, "❌ {}", failure)?;
            return Ok(TaskOutcome::Failed(failure));
        }
        writeln!(out, "✓ Created directory: {}", task.local_dir.display())?;

        let target = task.target_path();
        if let Some(size_bytes) = existing_file_size(&target).await {
            debug!(path = %target.display(), size_bytes, "File already present, skipping fetch");
            writeln!(out, "✓ File already exists: {}", target.display())?;
            writeln!(out, "  Size: {}", format_size(size_bytes))?;
            return Ok(TaskOutcome::Skipped {
                path: target,
                size_bytes,
            });
        }

        writeln!(out, "   Downloading... (this may take a while)")?;
        let fetched = self
            .fetcher
            .fetch(&task.source, &task.filename, &task.local_dir)
            .await;

        let outcome = match fetched {
            Ok(path) => match existing_file_size(&path).await {
                Some(size_bytes) => {
                    writeln!(out, "✓ Successfully downloaded: {}", path.display())?;
                    writeln!(out, "  Size: {}", format_size(size_bytes))?;
                    TaskOutcome::Downloaded { path, size_bytes }
                }
                None => {
                    warn!(path = %path.display(), "Fetch reported success but file is missing");
                    writeln!(out, "❌ Download failed: File not found at {}", path.display())?;
                    TaskOutcome::Failed(TaskFailure::MissingAfterDownload { path })
                }
            },
            Err(e) => {
                warn!(source = %task.source, filename = %task.filename, error = %e, "Fetch failed");
                writeln!(out, "❌ Error downloading {}: {}", task.filename, e)?;
                TaskOutcome::Failed(TaskFailure::Fetch(e))
            }
        };

        Ok(outcome)
    }
}
