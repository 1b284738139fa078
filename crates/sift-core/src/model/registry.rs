//! Data-type and operator registry.
//!
//! Each [`DataType`] owns a fixed, ordered list of permitted [`Operator`]s.
//! The tables are `const` and shared process-wide.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operator of a filter.
///
/// `And` and `Or` are join tokens used when rendering a query; they are
/// never valid as a filter's own operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    /// Exact match.
    Eq,
    /// Negated match.
    Not,
    /// Contains match (`*value*`).
    Like,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Inclusive range between a lower and an upper bound.
    Between,
    /// Conjunction join token.
    And,
    /// Disjunction join token.
    Or,
}

impl Operator {
    /// The upper-case token used on the wire and in rendered queries.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "EQ",
            Operator::Not => "NOT",
            Operator::Like => "LIKE",
            Operator::Gt => "GT",
            Operator::Gte => "GTE",
            Operator::Lt => "LT",
            Operator::Lte => "LTE",
            Operator::Between => "BETWEEN",
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const STRING_OPERATORS: &[Operator] = &[Operator::Eq, Operator::Not, Operator::Like];

const RANGE_OPERATORS: &[Operator] = &[
    Operator::Eq,
    Operator::Not,
    Operator::Lt,
    Operator::Lte,
    Operator::Gt,
    Operator::Gte,
    Operator::Between,
];

const BOOLEAN_OPERATORS: &[Operator] = &[Operator::Eq, Operator::Not];

const ALL_FIELDS_OPERATORS: &[Operator] = &[Operator::Eq];

/// Value type of a searchable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    /// Text values.
    String,
    /// Dates (range-capable).
    Date,
    /// `true` / `false`.
    Boolean,
    /// Numeric values (range-capable).
    Number,
    /// Fulltext search across every field.
    AllFields,
}

impl DataType {
    /// Every data type, in declaration order.
    pub const ALL: [DataType; 5] = [
        DataType::String,
        DataType::Date,
        DataType::Boolean,
        DataType::Number,
        DataType::AllFields,
    ];

    /// Operators permitted for this data type, in their canonical order.
    pub fn operators(self) -> &'static [Operator] {
        match self {
            DataType::String => STRING_OPERATORS,
            DataType::Date | DataType::Number => RANGE_OPERATORS,
            DataType::Boolean => BOOLEAN_OPERATORS,
            DataType::AllFields => ALL_FIELDS_OPERATORS,
        }
    }

    /// Advisory check whether `operator` is listed for this data type.
    pub fn supports(self, operator: Operator) -> bool {
        self.operators().contains(&operator)
    }
}
