//! Conversion of raw per-index schema payloads into typed mapping trees.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sift_core::{Error, Result};

use crate::node::MappingProperties;

/// The schema of one index as returned by the store's mapping endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexMapping {
    /// The `mappings` section; absent for indices without a schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<MappingSection>,
}

/// The `mappings` section of an index schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingSection {
    /// Top-level fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<MappingProperties>,
}

impl IndexMapping {
    /// Top-level fields, if the schema defines any.
    pub fn properties(&self) -> Option<&MappingProperties> {
        self.mappings.as_ref()?.properties.as_ref()
    }
}

/// Convert a raw `{mappings: {properties: {...}}}` payload.
///
/// Absent sections are not an error; they simply yield no properties.
///
/// # Errors
///
/// Returns [`Error::MappingExtraction`] carrying the conversion message when
/// a present subtree does not fit the typed tree.
pub fn parse_index_mapping(payload: &Value) -> Result<IndexMapping> {
    IndexMapping::deserialize(payload).map_err(Error::mapping_extraction)
}
