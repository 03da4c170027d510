pub mod app_config;
pub mod gateway_config;
pub mod sync_config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("{name} must be a positive whole number of seconds, got {value:?}")]
    InvalidSeconds { name: &'static str, value: String },
}

/// Parses an optional seconds value; blank counts as unset.
fn parse_seconds(name: &'static str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(secs)),
        _ => Err(ConfigError::InvalidSeconds { name, value: raw }),
    }
}
