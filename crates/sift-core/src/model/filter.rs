//! A single typed filter of a search query.

use serde::{Deserialize, Serialize};

use super::{DataType, Operator};
use crate::error::{Error, Result};

/// One filter condition on a dotted property path.
///
/// `BETWEEN` uses `lower_bound`/`upper_bound`; every other operator uses
/// `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Dotted property path, or `_all_fields` for fulltext search.
    pub property: String,

    /// Comparison operator.
    pub operator: Operator,

    /// Value to compare against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Lower bound of a `BETWEEN` filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,

    /// Upper bound of a `BETWEEN` filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,

    /// Declared value type; only `STRING` values are escaped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
}

impl Filter {
    /// Create a filter with no value, bounds or data type.
    pub fn new(property: impl Into<String>, operator: Operator) -> Self {
        Self {
            property: property.into(),
            operator,
            value: None,
            lower_bound: None,
            upper_bound: None,
            data_type: None,
        }
    }

    /// Shorthand for an `EQ` filter.
    pub fn eq(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(property, Operator::Eq).with_value(value)
    }

    /// Shorthand for a `BETWEEN` filter.
    pub fn between(
        property: impl Into<String>,
        lower: impl Into<String>,
        upper: impl Into<String>,
    ) -> Self {
        Self::new(property, Operator::Between).with_bounds(lower, upper)
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set both bounds.
    pub fn with_bounds(mut self, lower: impl Into<String>, upper: impl Into<String>) -> Self {
        self.lower_bound = Some(lower.into());
        self.upper_bound = Some(upper.into());
        self
    }

    /// Set the declared data type.
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Check the structural requirement of the filter's operator.
    ///
    /// `BETWEEN` needs both bounds (the upper bound is checked first); every
    /// other operator needs a value. Join tokens pass here and are rejected
    /// when the filter is rendered.
    pub fn validate(&self) -> Result<()> {
        if self.operator == Operator::Between {
            if self.upper_bound.is_none() {
                return Err(Error::InvalidBetweenFilterMissingUpperBound {
                    property: self.property.clone(),
                });
            }
            if self.lower_bound.is_none() {
                return Err(Error::InvalidBetweenFilterMissingLowerBound {
                    property: self.property.clone(),
                });
            }
            return Ok(());
        }
        if self.value.is_none() {
            return Err(Error::missing_value(&self.property));
        }
        Ok(())
    }
}
