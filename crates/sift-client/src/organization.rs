//! Space directory client for the organization manager.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{authorize, decode_body, send_for_body, SpaceDirectory};

/// [`SpaceDirectory`] backed by the organization manager's REST API.
#[derive(Debug, Clone)]
pub struct OrganizationManagerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OrganizationManagerClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientUnavailable`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = config
            .http_client()
            .map_err(|e| Error::ClientUnavailable(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.spaces_endpoint.clone(),
        })
    }
}

#[async_trait]
impl SpaceDirectory for OrganizationManagerClient {
    async fn list_accessible_spaces(&self, token: &str) -> Result<Vec<String>> {
        log::debug!("GET {}", self.endpoint);
        let request = authorize(self.http.get(&self.endpoint), token);
        let body = send_for_body(request, &self.endpoint).await?;
        decode_body(body)
    }
}
