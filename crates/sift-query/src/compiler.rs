//! Filter-to-query compiler.
//!
//! Translates a list of typed [`Filter`]s into a single query-string
//! expression and wraps it, together with paging and source selection, into
//! a [`SearchPayload`].
//!
//! # Rendering
//!
//! | Operator | Rendering | Group |
//! |----------|-----------|-------|
//! | `EQ` | `p:v` | equal |
//! | `LIKE` | `p:*v*` | equal |
//! | `BETWEEN` | `p:[ lo TO hi ]` | equal |
//! | `NOT` | `NOT p:v` | not |
//! | `GT` | `p:{ v TO * }` | range |
//! | `GTE` | `p:[ v TO * ]` | range |
//! | `LT` | `p:{ * TO v }` | range |
//! | `LTE` | `p:[ * TO v ]` | range |
//!
//! Values sharing a property within the equal or not group are OR-ed:
//! `p:( v1 OR v2 )`. The final expression joins the range clauses, the equal
//! clause and the not clause with ` AND `, or is `*` when nothing remains.

use sift_core::{DataType, Error, Filter, Operator, Query, Result, ALL_FIELDS};

use crate::payload::SearchPayload;

/// Expression matching every document.
pub const MATCH_ALL: &str = "*";

const AND_JOIN: &str = " AND ";
const OR_JOIN: &str = " OR ";

/// Values collected per property, in first-appearance order.
#[derive(Debug, Default)]
struct PropertyGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl PropertyGroups {
    fn push(&mut self, property: &str, value: String) {
        match self.groups.iter_mut().find(|(p, _)| p == property) {
            Some((_, values)) => values.push(value),
            None => self.groups.push((property.to_string(), vec![value])),
        }
    }

    /// Render all buckets as one ` AND `-joined clause.
    fn render(&self, negate: bool) -> Option<String> {
        if self.groups.is_empty() {
            return None;
        }
        let clause = self
            .groups
            .iter()
            .map(|(property, values)| render_bucket(property, values, negate))
            .collect::<Vec<_>>()
            .join(AND_JOIN);
        Some(clause)
    }
}

/// Escape a string value for the query-string syntax.
///
/// A leading `-` becomes `\-` and every `/` becomes `\/`.
pub fn escape_value(value: &str) -> String {
    let value = match value.strip_prefix('-') {
        Some(rest) => format!("\\-{rest}"),
        None => value.to_string(),
    };
    value.replace('/', "\\/")
}

/// The filter's value, escaped when it is declared `STRING`.
fn filter_value(filter: &Filter) -> Result<String> {
    let value = filter
        .value
        .as_deref()
        .ok_or_else(|| Error::missing_value(&filter.property))?;
    if filter.data_type == Some(DataType::String) {
        Ok(escape_value(value))
    } else {
        Ok(value.to_string())
    }
}

fn bounds(filter: &Filter) -> Result<(&str, &str)> {
    let upper = filter.upper_bound.as_deref().ok_or_else(|| {
        Error::InvalidBetweenFilterMissingUpperBound {
            property: filter.property.clone(),
        }
    })?;
    let lower = filter.lower_bound.as_deref().ok_or_else(|| {
        Error::InvalidBetweenFilterMissingLowerBound {
            property: filter.property.clone(),
        }
    })?;
    Ok((lower, upper))
}

fn range_clause(property: &str, lower: &str, upper: &str, inclusive: bool) -> String {
    if inclusive {
        format!("{property}:[ {lower} TO {upper} ]")
    } else {
        format!("{property}:{{ {lower} TO {upper} }}")
    }
}

fn render_bucket(property: &str, values: &[String], negate: bool) -> String {
    if property.eq_ignore_ascii_case(ALL_FIELDS) {
        return render_all_fields(values);
    }
    let value = match values {
        [single] => single.clone(),
        many => format!("( {} )", many.join(OR_JOIN)),
    };
    let prefix = if negate { "NOT " } else { "" };
    format!("{prefix}{property}:{value}")
}

fn render_all_fields(values: &[String]) -> String {
    match values {
        [single] => all_fields_terms(single),
        many => {
            let alternatives: Vec<String> = many
                .iter()
                .map(|value| format!("( {} )", all_fields_terms(value)))
                .collect();
            format!("({})", alternatives.join(OR_JOIN))
        }
    }
}

/// Whitespace-separated terms of a fulltext value, AND-ed together.
fn all_fields_terms(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(AND_JOIN)
}

/// Compile filters into a query-string expression.
///
/// Every filter is validated before any of them is rendered, so a malformed
/// filter anywhere in the list fails the whole compilation.
///
/// # Errors
///
/// - [`Error::InvalidBetweenFilterMissingUpperBound`] /
///   [`Error::InvalidBetweenFilterMissingLowerBound`] for incomplete ranges
/// - [`Error::InvalidFilterMissingValue`] for any other filter without value
/// - [`Error::UnknownOperator`] for the join tokens `AND`/`OR`
pub fn compile_expression(filters: &[Filter]) -> Result<String> {
    for filter in filters {
        filter.validate()?;
    }

    let mut clauses: Vec<String> = Vec::new();
    let mut equal = PropertyGroups::default();
    let mut not = PropertyGroups::default();

    for filter in filters {
        let property = filter.property.as_str();
        match filter.operator {
            Operator::Eq => equal.push(property, filter_value(filter)?),
            Operator::Like => equal.push(property, format!("*{}*", filter_value(filter)?)),
            Operator::Between => {
                let (lower, upper) = bounds(filter)?;
                equal.push(property, format!("[ {lower} TO {upper} ]"));
            }
            Operator::Not => not.push(property, filter_value(filter)?),
            Operator::Gt => clauses.push(range_clause(property, &filter_value(filter)?, "*", false)),
            Operator::Gte => clauses.push(range_clause(property, &filter_value(filter)?, "*", true)),
            Operator::Lt => clauses.push(range_clause(property, "*", &filter_value(filter)?, false)),
            Operator::Lte => clauses.push(range_clause(property, "*", &filter_value(filter)?, true)),
            Operator::And | Operator::Or => {
                return Err(Error::UnknownOperator {
                    operator: filter.operator,
                });
            }
        }
    }

    clauses.extend(equal.render(false));
    clauses.extend(not.render(true));

    if clauses.is_empty() {
        return Ok(MATCH_ALL.to_string());
    }
    Ok(clauses.join(AND_JOIN))
}

/// Compile a query into its search payload.
///
/// # Errors
///
/// [`Error::InvalidQueryMissingIndex`] when the query names no index, or any
/// filter validation error.
pub fn build_payload(query: &Query) -> Result<SearchPayload> {
    query.validate()?;
    let expression = compile_expression(&query.filter)?;
    log::debug!(
        "Compiled {} filters for '{}': {}",
        query.filter.len(),
        query.index_name,
        expression
    );
    Ok(SearchPayload::new(
        query.offset(),
        query.size,
        expression,
        query.result_properties.clone(),
    ))
}

/// Compile a query into the serialized request body.
///
/// # Errors
///
/// Any compilation error, or [`Error::QueryCompilationFailed`] if the
/// payload cannot be serialized.
pub fn build_search(query: &Query) -> Result<String> {
    let payload = build_payload(query)?;
    serde_json::to_string(&payload).map_err(Error::QueryCompilationFailed)
}
