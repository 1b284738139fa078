//! Data model shared by the compiler, the mapping flattener and the gateway.
//!
//! These types are the JSON-facing shapes of the search API. Field names
//! follow the wire format (`index_name`, `resultProperties`, `lowerBound`,
//! `max_results`, ...), so the serde attributes matter.

mod criteria;
mod filter;
mod query;
mod registry;
mod result;

pub use criteria::Criteria;
pub use filter::Filter;
pub use query::{Query, DEFAULT_PAGE_SIZE};
pub use registry::{DataType, Operator};
pub use result::SearchResult;

/// Hard cap on the result window (`from + size`) the document store accepts.
pub const MAX_RESULT_WINDOW: u32 = 10_000;

/// Reserved property name that requests a fulltext search over all fields.
pub const ALL_FIELDS: &str = "_all_fields";
