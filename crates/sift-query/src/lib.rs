//! Query compilation and result projection for sift.
//!
//! This crate implements the two pure halves of a search round trip:
//!
//! - [`compiler`]: typed [`Filter`](sift_core::Filter)s → query-string
//!   expression → [`SearchPayload`]
//! - [`projection`]: raw [`SearchResponse`] →
//!   [`SearchResult`](sift_core::SearchResult)
//!
//! Sending the payload is left to a transport (see `sift-client`).
//!
//! # Example
//!
//! ```
//! use sift_core::{Filter, Query};
//! use sift_query::build_payload;
//!
//! let query = Query::new("measurements")
//!     .with_filter(Filter::eq("metadata.customer.customerId", "efs"))
//!     .with_page(0, 20);
//! let payload = build_payload(&query).unwrap();
//! assert_eq!(payload.expression(), "metadata.customer.customerId:efs");
//! assert_eq!(payload.from, 0);
//! ```

pub mod compiler;
pub mod payload;
pub mod projection;
pub mod response;

pub use compiler::{build_payload, build_search, compile_expression, escape_value, MATCH_ALL};
pub use payload::{QueryClause, QueryString, SearchPayload};
pub use projection::project;
pub use response::{Hit, ResponseHits, SearchResponse, TotalHits};
