//! Typed field-mapping tree.
//!
//! A mapping tree mirrors the `properties` section of an index schema:
//! leaves are scalar field definitions, inner nodes are object or nested
//! containers that hold their own `properties`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name → node, one level of a mapping tree.
pub type MappingProperties = BTreeMap<String, FieldMappingNode>;

/// One field definition in an index schema.
///
/// Keys the tree does not model (analyzers, formats, ...) are ignored on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMappingNode {
    /// Raw store type (`keyword`, `long`, `date`, `object`, ...).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Multi-field definitions (e.g. a `keyword` sub-field of a `text` field).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Map<String, Value>>,

    /// Child fields; present only on object/nested containers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<MappingProperties>,

    /// `false` when the field is stored but not parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// `false` when the field is not searchable.
    #[serde(default, rename = "index", skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
}

impl FieldMappingNode {
    /// Create a leaf of the given type.
    pub fn leaf(field_type: impl Into<String>) -> Self {
        Self {
            field_type: Some(field_type.into()),
            ..Default::default()
        }
    }

    /// Create a container holding `properties`.
    pub fn parent(properties: MappingProperties) -> Self {
        Self {
            properties: Some(properties),
            ..Default::default()
        }
    }

    /// Returns `true` if this node is a container.
    pub fn is_parent(&self) -> bool {
        self.properties.is_some()
    }

    /// Only an explicit `enabled: false` disables a field.
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    /// Only an explicit `index: false` makes a field unsearchable.
    pub fn is_indexed(&self) -> bool {
        self.indexed != Some(false)
    }
}
