//! Utility modules for index-name handling.
//!
//! # Modules
//!
//! - [`index_names`]: Chunking of index lists, wildcard matching, and
//!   clearing of store-internal indices

pub mod index_names;
