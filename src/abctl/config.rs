use crate::error::{AbctlError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_HTTPD: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for abctl, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbctlConfig {
    /// Base address of the tournament server
    #[serde(default = "default_httpd")]
    pub httpd: String,

    /// Per-request timeout for the HTTP client, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_httpd() -> String {
    DEFAULT_HTTPD.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AbctlConfig {
    fn default() -> Self {
        Self {
            httpd: default_httpd(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AbctlConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            AbctlError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        let config: AbctlConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
