//! Session configuration
//!
//! Layered loading: built-in defaults, an optional configuration file from
//! the standard locations, and `PCE_NETCONF_*` environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Settings for one NETCONF session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Transport establishment timeout (seconds)
    pub connect_timeout_secs: u64,
    /// Timeout for the server hello after connecting (seconds)
    pub hello_timeout_secs: u64,
    /// NETCONF-over-SSH port
    pub port: u16,
    /// Login user for the transport connector
    pub username: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            hello_timeout_secs: 30,
            port: 830,
            username: "admin".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a file, with environment overrides applied
    /// on top.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&path.as_ref().display().to_string()))
            .add_source(config::Environment::with_prefix("PCE_NETCONF"))
            .build()?;

        let config: SessionConfig = settings.try_deserialize()?;
        Ok(config)
    }

    /// Load configuration with defaults, trying the standard file locations
    /// in order. A file that fails to load is logged and skipped.
    pub fn load_with_defaults() -> Self {
        let config_paths = ["/etc/pce/netconf.conf", "./netconf.conf"];

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::load_from_file(path) {
                    Ok(loaded) => return loaded,
                    Err(error) => {
                        log::warn!("Failed to load config from {}: {}", path, error);
                    }
                }
            }
        }

        Self::default()
    }
}
