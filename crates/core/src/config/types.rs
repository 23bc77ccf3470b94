use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub hub: HubConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Model hub connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HubConfig {
    /// Base URL of a Hugging Face compatible hub
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Repository revision files are resolved against
    #[serde(default = "default_revision")]
    pub revision: String,
    /// Access token sent as a bearer credential (optional)
    #[serde(default)]
    pub token: Option<String>,
    /// Connect timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            revision: default_revision(),
            token: None,
            timeout: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://huggingface.co".to_string()
}

fn default_revision() -> String {
    "main".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Listing run settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Case-sensitive filename suffix a listed file must end with
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

fn default_suffix() -> String {
    ".gguf".to_string()
}

/// Sanitized config for logging (token redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub endpoint: String,
    pub revision: String,
    pub token_configured: bool,
    pub timeout: u32,
    pub suffix: String,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.hub.endpoint.clone(),
            revision: config.hub.revision.clone(),
            token_configured: config.hub.token.as_deref().is_some_and(|t| !t.is_empty()),
            timeout: config.hub.timeout,
            suffix: config.listing.suffix.clone(),
        }
    }
}
