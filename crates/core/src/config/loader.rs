use figment::{
    providers::{Env, Serialized},
    Figment,
};

use super::{types::Config, ConfigError};

/// Prefix of the environment variables that override configuration.
pub const ENV_PREFIX: &str = "MODELFETCH_";

/// Load configuration from built-in defaults with environment variable overrides
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from_figment(
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("_")),
    )
}

/// Extract configuration from an already assembled figment (useful for testing)
pub fn load_config_from_figment(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}
