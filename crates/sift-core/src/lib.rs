//! Sift Core: shared types, errors, and utilities for the sift search gateway.
//!
//! This crate provides the foundational types used across all sift crates.
//! It has no internal sift dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy, codes, and Result alias
//! - [`model`]: Query, filter, criteria and result types plus the
//!   data-type/operator registry
//! - [`util`]: Index-name chunking, wildcard matching and index clearing

pub mod error;
pub mod model;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, ErrorKind, Result};
pub use model::{
    Criteria, DataType, Filter, Operator, Query, SearchResult, ALL_FIELDS, MAX_RESULT_WINDOW,
};

// Convenience re-exports from util
pub use util::index_names::{
    clear_internal_indices, filter_by_wildcard, split_by_max_length, wildcard_to_regex,
    WildcardMatcher,
};
