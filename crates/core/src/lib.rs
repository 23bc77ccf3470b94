pub mod benchmark;
pub mod config;
pub mod hub;
pub mod listing;
pub mod orchestrator;
pub mod report;
pub mod task;
pub mod testing;

pub use config::{
    load_config, load_config_from_figment, validate_config, Config, ConfigError, HubConfig,
    ListingConfig, SanitizedConfig,
};
pub use hub::{FetchService, HubClient, HubError, ListingService};
pub use listing::{filter_by_suffix, list_sources, SourceListing};
pub use orchestrator::{DownloadOrchestrator, RunSummary, TaskFailure, TaskOutcome};
pub use report::format_size;
pub use task::DownloadTask;
