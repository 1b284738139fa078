//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Longest comma-joined index list sent in one mapping request line.
pub const DEFAULT_MAX_REQUEST_LINE: usize = 4000;

/// Connection settings for the document store and the space directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the document store.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// URL listing the spaces the caller may access.
    #[serde(default = "default_spaces_endpoint")]
    pub spaces_endpoint: String,

    /// Maximum length of the index list in a mapping request.
    #[serde(default = "default_max_request_line")]
    pub max_request_line: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification (test clusters only).
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_search_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_spaces_endpoint() -> String {
    "http://localhost:8080/api/v1.0/spaces".to_string()
}

fn default_max_request_line() -> usize {
    DEFAULT_MAX_REQUEST_LINE
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            spaces_endpoint: default_spaces_endpoint(),
            max_request_line: default_max_request_line(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a `reqwest` client from these settings.
    pub(crate) fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
    }
}
