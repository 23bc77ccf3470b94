//! Download orchestrator.
//!
//! Processes download tasks strictly in order. Each task is a two-branch
//! decision: a file already on disk is counted as a success without touching
//! the hub, anything else is handed to the `FetchService`. A failed task never
//! stops the run; it is tallied and reported in the final summary.

mod runner;
mod types;

pub use runner::DownloadOrchestrator;
pub use types::{RunSummary, TaskFailure, TaskOutcome};
