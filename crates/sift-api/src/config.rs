//! Gateway configuration.
//!
//! Settings are read from an optional TOML file and then overridden by
//! environment variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SIFT_SEARCH_URL` | `client.search_url` |
//! | `SIFT_SPACES_ENDPOINT` | `client.spaces_endpoint` |
//! | `SIFT_BIND_ADDRESS` | `bind_address` |

use std::path::Path;

use serde::{Deserialize, Serialize};

use sift_client::ClientConfig;

use crate::error::{Error, Result};

/// Environment variable overriding the document store URL.
pub const ENV_SEARCH_URL: &str = "SIFT_SEARCH_URL";
/// Environment variable overriding the spaces endpoint.
pub const ENV_SPACES_ENDPOINT: &str = "SIFT_SPACES_ENDPOINT";
/// Environment variable overriding the bind address.
pub const ENV_BIND_ADDRESS: &str = "SIFT_BIND_ADDRESS";

/// Top-level gateway settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Address the HTTP server listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Require a bearer token on every request.
    #[serde(default = "default_auth_enabled")]
    pub auth_enabled: bool,

    /// Downstream client settings.
    #[serde(default)]
    pub client: ClientConfig,
}

fn default_bind_address() -> String {
    "0.0.0.0:8090".to_string()
}

fn default_auth_enabled() -> bool {
    true
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            auth_enabled: default_auth_enabled(),
            client: ClientConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Load settings from `path` (or defaults) and apply the process
    /// environment on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SEARCH_URL) {
            self.client.search_url = url;
        }
        if let Some(endpoint) = lookup(ENV_SPACES_ENDPOINT) {
            self.client.spaces_endpoint = endpoint;
        }
        if let Some(address) = lookup(ENV_BIND_ADDRESS) {
            self.bind_address = address;
        }
    }
}
