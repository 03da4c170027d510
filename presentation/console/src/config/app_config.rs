use super::{ConfigError, gateway_config::GatewayConfig, sync_config::SyncConfig};

pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub sync: SyncConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gateway: GatewayConfig::from_env()?,
            sync: SyncConfig::from_env()?,
        })
    }
}
