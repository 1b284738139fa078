//! # sift-client
//!
//! Transport clients and the search service for the sift search gateway.
//!
//! This crate connects the pure compiler and schema crates to the outside
//! world:
//! - [`SearchTransport`] / [`SpaceDirectory`]: async seams to the document
//!   store and the organization manager
//! - [`ElasticClient`] / [`OrganizationManagerClient`]: `reqwest`
//!   implementations of those seams
//! - [`SearchService`]: search, index listing, criteria and result-property
//!   introspection scoped to the caller's spaces

pub mod config;
pub mod elastic;
pub mod error;
pub mod organization;
pub mod service;
pub mod transport;

pub use config::ClientConfig;
pub use elastic::ElasticClient;
pub use error::{Error, Result};
pub use organization::OrganizationManagerClient;
pub use service::SearchService;
pub use transport::{SearchTransport, SpaceDirectory};
