//! Model hub abstraction.
//!
//! This module provides the `FetchService` and `ListingService` traits the
//! orchestrator and the listing run depend on, plus `HubClient`, an
//! implementation of both against a Hugging Face compatible HTTP API.

mod client;
mod types;

pub use client::HubClient;
pub use types::*;
