//! A searchable property advertised by the introspection endpoints.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::DataType;

/// A filterable property together with its value type.
///
/// Criteria have set semantics: two criteria are equal when both the
/// property path and the data type match. Serialized criteria also list the
/// operators their data type permits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    /// Fully dotted property path.
    pub property: String,
    /// Value type of the property.
    pub data_type: DataType,
}

impl Criteria {
    /// Create a criterion.
    pub fn new(property: impl Into<String>, data_type: DataType) -> Self {
        Self {
            property: property.into(),
            data_type,
        }
    }
}

impl Serialize for Criteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Criteria", 3)?;
        state.serialize_field("property", &self.property)?;
        state.serialize_field("dataType", &self.data_type)?;
        state.serialize_field("operators", self.data_type.operators())?;
        state.end()
    }
}
