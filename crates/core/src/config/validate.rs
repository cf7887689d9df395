use super::{Config, ConfigError};

/// Validate a loaded configuration before wiring anything to it
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let url = config.remote.url.trim();
    if url.is_empty() {
        return Err(ConfigError::ValidationError(
            "remote.url must not be empty".to_string(),
        ));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "remote.url must start with http:// or https://, got: {}",
            url
        )));
    }

    if config.remote.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "remote.timeout_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
