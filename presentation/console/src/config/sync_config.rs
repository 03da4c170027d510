use std::env;
use std::time::Duration;

use business::application::product::polling::DEFAULT_REFRESH_INTERVAL;

use super::{ConfigError, parse_seconds};

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub refresh_interval: Duration,
}

impl SyncConfig {
    /// Environment variables:
    /// - INVENTORY_REFRESH_INTERVAL_SECS: polling period (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(env::var("INVENTORY_REFRESH_INTERVAL_SECS").ok())
    }

    fn parse(interval: Option<String>) -> Result<Self, ConfigError> {
        let refresh_interval = parse_seconds("INVENTORY_REFRESH_INTERVAL_SECS", interval)?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REFRESH_INTERVAL);
        Ok(Self { refresh_interval })
    }
}
