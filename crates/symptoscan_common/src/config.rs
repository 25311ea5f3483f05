//! Configuration for the SymptoScan proxy.
//!
//! Loads settings from /etc/symptoscan/config.toml or uses defaults, then
//! applies environment overrides (`PORT`, `SYMPTOSCAN_REMOTE_URL`,
//! `SYMPTOSCAN_TABLE`).

use crate::error::ConfigError;
use crate::fallback_table::FallbackTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/symptoscan/config.toml";

pub const ENV_PORT: &str = "PORT";
pub const ENV_REMOTE_URL: &str = "SYMPTOSCAN_REMOTE_URL";
pub const ENV_TABLE: &str = "SYMPTOSCAN_TABLE";

/// Remote health-topics search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Query endpoint of the search service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Database searched (`db` query parameter)
    #[serde(default = "default_db")]
    pub db: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://wsearch.nlm.nih.gov/ws/query".to_string()
}

fn default_db() -> String {
    "healthTopics".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            db: default_db(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Proxy server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub remote: RemoteConfig,

    /// Replacement fallback table (TOML). Built-in table when unset.
    #[serde(default)]
    pub fallback_table: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5500
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            remote: RemoteConfig::default(),
            fallback_table: None,
        }
    }
}

impl ServerConfig {
    /// Load config file (or defaults) and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from_path(CONFIG_PATH).unwrap_or_else(|e| {
            warn!("Config not found, using defaults: {}", e);
            ServerConfig::default()
        });
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load config from specific path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT.to_string(),
                value: port.clone(),
            })?;
        } else {
            info!("{} not set, using {}", ENV_PORT, self.port);
        }
        if let Some(url) = lookup(ENV_REMOTE_URL) {
            self.remote.base_url = url;
        }
        if let Some(path) = lookup(ENV_TABLE) {
            self.fallback_table = Some(PathBuf::from(path));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured fallback table, or the built-in one
    pub fn fallback_table(&self) -> Result<FallbackTable, ConfigError> {
        match &self.fallback_table {
            Some(path) => FallbackTable::load_from_path(path),
            None => Ok(FallbackTable::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5500);
        assert_eq!(config.remote.db, "healthTopics");
        assert!(config.fallback_table.is_none());
    }

    #[test]
    fn test_port_override() {
        let mut config = ServerConfig::default();
        config.apply_overrides(env(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = ServerConfig::default();
        let err = config.apply_overrides(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = 9000\n\n[remote]\ntimeout_secs = 3\n").unwrap();

        let config = ServerConfig::load_from_path(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.remote.timeout_secs, 3);
        assert_eq!(config.remote.base_url, "https://wsearch.nlm.nih.gov/ws/query");
    }

    #[test]
    fn test_table_override() {
        let mut config = ServerConfig::default();
        config
            .apply_overrides(env(&[("SYMPTOSCAN_TABLE", "/nonexistent/table.toml")]))
            .unwrap();
        assert!(config.fallback_table().is_err());
        assert_eq!(ServerConfig::default().fallback_table().unwrap().len(), 74);
    }
}
