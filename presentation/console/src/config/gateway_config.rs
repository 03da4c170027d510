use std::env;
use std::time::Duration;

use url::Url;

use super::{ConfigError, parse_seconds};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Where the inventory service lives and how long a request may take.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: Url,
    pub request_timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Load gateway configuration from environment variables
    ///
    /// Environment variables:
    /// - INVENTORY_API_URL: base endpoint (default: "http://127.0.0.1:8000/api")
    /// - INVENTORY_REQUEST_TIMEOUT_SECS: per-request timeout (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(
            env::var("INVENTORY_API_URL").ok(),
            env::var("INVENTORY_REQUEST_TIMEOUT_SECS").ok(),
        )
    }

    fn parse(base_url: Option<String>, timeout: Option<String>) -> Result<Self, ConfigError> {
        let raw = base_url
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let base_url = Url::parse(raw.trim())
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .ok_or(ConfigError::InvalidUrl {
                name: "INVENTORY_API_URL",
                value: raw.clone(),
            })?;

        let request_timeout = parse_seconds("INVENTORY_REQUEST_TIMEOUT_SECS", timeout)?
            .map(Duration::from_secs);

        Ok(Self {
            base_url,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        // Act
        let config = GatewayConfig::parse(None, None).unwrap();

        // Assert
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/api");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn should_read_url_and_timeout_when_set() {
        let config = GatewayConfig::parse(
            Some("https://inventory.example.com/v2".to_string()),
            Some("15".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url.host_str(), Some("inventory.example.com"));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn should_reject_url_without_http_scheme() {
        let result = GatewayConfig::parse(Some("ftp://files.example.com".to_string()), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let result = GatewayConfig::parse(None, Some("0".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidSeconds { .. })));
    }
}
