//! API server implementation

use axum::Router;
use tokio::net::TcpListener;

use sift_client::SearchService;

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::routes;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The search service.
    pub service: SearchService,
    /// Whether a bearer token is required.
    pub auth_enabled: bool,
}

impl AppState {
    /// Create handler state.
    pub fn new(service: SearchService, auth_enabled: bool) -> Self {
        Self {
            service,
            auth_enabled,
        }
    }
}

/// sift HTTP gateway
#[derive(Debug)]
pub struct Server {
    bind_address: String,
    state: AppState,
}

impl Server {
    /// Create a server with HTTP clients built from `config`.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let service = SearchService::from_config(&config.client)?;
        Ok(Self::with_state(
            config.bind_address.clone(),
            AppState::new(service, config.auth_enabled),
        ))
    }

    /// Create a server over prepared state.
    pub fn with_state(bind_address: String, state: AppState) -> Self {
        Self {
            bind_address,
            state,
        }
    }

    /// The configured bind address.
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// The router serving all endpoints.
    pub fn router(&self) -> Router {
        routes::router(self.state.clone())
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.bind_address).await?;
        tracing::info!(
            address = %listener.local_addr()?,
            auth = self.state.auth_enabled,
            "sift gateway listening"
        );
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
