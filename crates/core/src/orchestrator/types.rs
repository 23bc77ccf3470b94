//! Orchestrator types.

use std::path::PathBuf;
use thiserror::Error;

use crate::hub::HubError;

/// Why a single task did not produce a file.
#[derive(Debug, Error)]
pub enum TaskFailure {
    #[error("Failed to create directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fetch(#[from] HubError),

    #[error("File not found at {path}")]
    MissingAfterDownload { path: PathBuf },
}

/// Result of processing one task.
#[derive(Debug)]
pub enum TaskOutcome {
    /// The file was already on disk; the hub was not contacted.
    Skipped { path: PathBuf, size_bytes: u64 },
    /// The file was fetched and found on disk afterwards.
    Downloaded { path: PathBuf, size_bytes: u64 },
    /// The task failed and contributes no bytes.
    Failed(TaskFailure),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, TaskOutcome::Failed(_))
    }

    /// Bytes this task adds to the run total (zero on failure).
    pub fn size_bytes(&self) -> u64 {
        match self {
            TaskOutcome::Skipped { size_bytes, .. } | TaskOutcome::Downloaded { size_bytes, .. } => {
                *size_bytes
            }
            TaskOutcome::Failed(_) => 0,
        }
    }
}

/// Tally of a whole run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of tasks in the run.
    pub total: usize,
    /// Tasks that ended with the file on disk.
    pub succeeded: usize,
    /// Sum of the sizes of all successful tasks.
    pub total_bytes: u64,
    /// Per-task outcomes, in task order.
    pub outcomes: Vec<TaskOutcome>,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            outcomes: Vec::with_capacity(total),
            ..Default::default()
        }
    }

    /// Folds one task outcome into the counters.
    pub fn record(&mut self, outcome: TaskOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
            self.total_bytes += outcome.size_bytes();
        }
        self.outcomes.push(outcome);
    }

    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.succeeded)
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}
