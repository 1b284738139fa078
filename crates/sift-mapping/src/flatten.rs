//! Depth-first flattening of mapping trees.
//!
//! Both walks mutate a caller-supplied set and build dotted paths from the
//! field names along the way. Containers are transparent: they are never
//! reported themselves, only their leaves are.
//!
//! The two walks apply different inclusion policies:
//!
//! | Walk | Disabled leaf | Non-indexed leaf |
//! |------|---------------|------------------|
//! | [`collect_criteria`] | skipped | skipped |
//! | [`collect_property_names`] | kept | kept |
//!
//! Criteria must be filterable; result properties only need to exist in the
//! stored source.

use std::collections::BTreeSet;

use sift_core::{Criteria, DataType};

use crate::node::{FieldMappingNode, MappingProperties};

/// Classify a raw store type into a [`DataType`] (case-insensitive).
///
/// `float` and `long` are numbers, `date` and `boolean` map to themselves,
/// and everything else (including a missing type) is a string.
pub fn classify(field_type: Option<&str>) -> DataType {
    let Some(raw) = field_type else {
        return DataType::String;
    };
    match raw.to_ascii_lowercase().as_str() {
        "float" | "long" => DataType::Number,
        "date" => DataType::Date,
        "boolean" => DataType::Boolean,
        _ => DataType::String,
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Collect the filterable leaves of a mapping tree as [`Criteria`].
///
/// A leaf is included unless it is explicitly disabled (`enabled: false`) or
/// explicitly not indexed (`index: false`). `None` properties are a no-op.
pub fn collect_criteria(
    criteria: &mut BTreeSet<Criteria>,
    prefix: &str,
    properties: Option<&MappingProperties>,
) {
    let Some(properties) = properties else {
        return;
    };
    for (key, node) in properties {
        let path = join_path(prefix, key);
        if node.is_parent() {
            collect_criteria(criteria, &path, node.properties.as_ref());
        } else if node.is_enabled() && node.is_indexed() {
            criteria.insert(Criteria::new(path, leaf_type(node)));
        }
    }
}

/// Collect the dotted paths of every leaf of a mapping tree.
///
/// No enabled/indexed filtering is applied. `None` properties are a no-op.
pub fn collect_property_names(
    names: &mut BTreeSet<String>,
    prefix: &str,
    properties: Option<&MappingProperties>,
) {
    let Some(properties) = properties else {
        return;
    };
    for (key, node) in properties {
        let path = join_path(prefix, key);
        if node.is_parent() {
            collect_property_names(names, &path, node.properties.as_ref());
        } else {
            names.insert(path);
        }
    }
}

fn leaf_type(node: &FieldMappingNode) -> DataType {
    classify(node.field_type.as_deref())
}
