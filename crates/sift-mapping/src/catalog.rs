//! Criteria and property catalogs across many indices.
//!
//! The mapping endpoint answers with one schema per index, keyed by index
//! name. These helpers extract and flatten every schema and merge the
//! results into one sorted, deduplicated set.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use sift_core::{Criteria, Result};

use crate::extract::parse_index_mapping;
use crate::flatten::{collect_criteria, collect_property_names};

/// Filterable criteria across all indices of `mappings`.
///
/// # Errors
///
/// Fails on the first schema that cannot be extracted.
pub fn criteria_for_indices(mappings: &Map<String, Value>) -> Result<Vec<Criteria>> {
    let mut criteria = BTreeSet::new();
    for (index, payload) in mappings {
        let mapping = parse_index_mapping(payload)?;
        if mapping.properties().is_none() {
            log::warn!("Index '{index}' has no mapped properties, skipping");
            continue;
        }
        collect_criteria(&mut criteria, "", mapping.properties());
    }
    log::debug!(
        "Collected {} criteria from {} indices",
        criteria.len(),
        mappings.len()
    );
    Ok(criteria.into_iter().collect())
}

/// Dotted paths of every leaf across all indices of `mappings`.
///
/// # Errors
///
/// Fails on the first schema that cannot be extracted.
pub fn property_names_for_indices(mappings: &Map<String, Value>) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for (index, payload) in mappings {
        let mapping = parse_index_mapping(payload)?;
        if mapping.properties().is_none() {
            log::warn!("Index '{index}' has no mapped properties, skipping");
            continue;
        }
        collect_property_names(&mut names, "", mapping.properties());
    }
    Ok(names)
}
