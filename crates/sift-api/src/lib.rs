//! # sift-api
//!
//! HTTP gateway for the sift search service.
//!
//! This crate exposes [`SearchService`](sift_client::SearchService) over
//! axum:
//! - `POST /v1.0` runs a filtered, paged search
//! - `GET /v1.0/index`, `/v1.0/criteria`, `/v1.0/resultproperties`
//!   introspect the indices visible to the caller
//! - bearer-token extraction and a uniform JSON error body
//!
//! The `sift` binary wires configuration, logging and the server together.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use auth::BearerToken;
pub use config::GatewayConfig;
pub use error::{Error, ErrorBody, Result};
pub use server::{AppState, Server};
