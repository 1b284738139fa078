//! Index schema introspection for sift.
//!
//! This crate turns the per-index schemas reported by the document store
//! into the criteria and result-property catalogs the gateway advertises.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      sift-mapping                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  extract   raw {mappings: {properties}} → IndexMapping      │
//! │  node      FieldMappingNode tree                            │
//! │  flatten   depth-first walk → Criteria / property paths     │
//! │  catalog   merge across all indices of a mapping response   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Type classification
//!
//! | Store type | DataType |
//! |------------|----------|
//! | `float`, `long` | `NUMBER` |
//! | `date` | `DATE` |
//! | `boolean` | `BOOLEAN` |
//! | anything else | `STRING` |
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use sift_core::{Criteria, DataType};
//! use sift_mapping::criteria_for_indices;
//!
//! let response = json!({
//!     "orders": {"mappings": {"properties": {
//!         "a": {"type": "date", "enabled": false},
//!         "b": {"properties": {"c": {"type": "long"}}}
//!     }}}
//! });
//! let criteria = criteria_for_indices(response.as_object().unwrap()).unwrap();
//! assert_eq!(criteria, vec![Criteria::new("b.c", DataType::Number)]);
//! ```

pub mod catalog;
pub mod extract;
pub mod flatten;
pub mod node;

pub use catalog::{criteria_for_indices, property_names_for_indices};
pub use extract::{parse_index_mapping, IndexMapping, MappingSection};
pub use flatten::{classify, collect_criteria, collect_property_names};
pub use node::{FieldMappingNode, MappingProperties};
