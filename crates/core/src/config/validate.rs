use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Hub endpoint is an http(s) URL
/// - Hub revision is not empty
/// - Hub timeout is not 0
/// - Listing suffix is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let endpoint = &config.hub.endpoint;
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "hub.endpoint must be an http(s) URL, got {:?}",
            endpoint
        )));
    }

    if config.hub.revision.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "hub.revision cannot be empty".to_string(),
        ));
    }

    if config.hub.timeout == 0 {
        return Err(ConfigError::ValidationError(
            "hub.timeout cannot be 0".to_string(),
        ));
    }

    if config.listing.suffix.is_empty() {
        return Err(ConfigError::ValidationError(
            "listing.suffix cannot be empty".to_string(),
        ));
    }

    Ok(())
}
