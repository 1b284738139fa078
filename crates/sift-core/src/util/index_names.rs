//! Index-name utilities.
//!
//! The document store addresses several indices at once through a
//! comma-joined list in the request line, which has a hard length limit.
//! These helpers split such lists, match index names against shell-style
//! wildcards, and drop store-internal indices from listings.

use std::collections::BTreeSet;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Prefixes of indices the store keeps for itself.
const INTERNAL_INDEX_PREFIXES: &[&str] = &[".", "security-auditlog-"];

/// Internal index matched by name (case-insensitive).
const SECURITY_INFO_INDEX: &str = "securityinfo";

/// Split `names` into buckets whose comma-joined length stays within
/// `max_length`.
///
/// Names are accumulated greedily; a bucket is closed when appending the
/// next name (plus its comma) would exceed `max_length`, or at the end of
/// the list. Every name lands in exactly one bucket, in input order. A name
/// that is longer than `max_length` on its own becomes a single-name
/// bucket.
///
/// # Examples
///
/// ```
/// use sift_core::util::index_names::split_by_max_length;
///
/// let names = ["index1", "index2", "index3"];
/// let buckets = split_by_max_length(&names, 13);
/// assert_eq!(buckets, vec![vec!["index1", "index2"], vec!["index3"]]);
/// ```
pub fn split_by_max_length<S: AsRef<str>>(names: &[S], max_length: usize) -> Vec<Vec<String>> {
    let mut buckets = Vec::new();
    let mut bunch: Vec<String> = Vec::new();
    let mut bunch_len = 0usize;

    for (i, name) in names.iter().enumerate() {
        let name = name.as_ref();
        bunch_len += if bunch.is_empty() {
            name.len()
        } else {
            name.len() + 1
        };
        bunch.push(name.to_string());

        let close = match names.get(i + 1) {
            None => true,
            Some(next) => bunch_len + 1 + next.as_ref().len() > max_length,
        };
        if close {
            buckets.push(std::mem::take(&mut bunch));
            bunch_len = 0;
        }
    }

    buckets
}

/// Convert a wildcard pattern into an anchored regular expression.
///
/// `*` matches any sequence, `?` matches a single character, and every
/// other character matches itself.
///
/// # Examples
///
/// ```
/// use sift_core::util::index_names::wildcard_to_regex;
///
/// assert_eq!(wildcard_to_regex("*measurement?"), "^.*measurement.$");
/// assert_eq!(wildcard_to_regex("a.b"), r"^a\.b$");
/// ```
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 2);
    regex.push('^');
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            _ => {
                let mut buf = [0u8; 4];
                regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }
    regex.push('$');
    regex
}

/// A compiled wildcard pattern for index names.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    pattern: String,
    regex: Regex,
}

impl WildcardMatcher {
    /// Compile a wildcard pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndexPattern`] if the resulting expression
    /// cannot be compiled.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&wildcard_to_regex(pattern)).map_err(|e| {
            Error::InvalidIndexPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The wildcard pattern as supplied.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` if the whole `name` matches the pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Keep the entries of an index-keyed map whose key matches `pattern`.
pub fn filter_by_wildcard(pattern: &str, entries: Map<String, Value>) -> Result<Map<String, Value>> {
    let matcher = WildcardMatcher::new(pattern)?;
    let total = entries.len();
    let kept: Map<String, Value> = entries
        .into_iter()
        .filter(|(index, _)| matcher.is_match(index))
        .collect();
    log::debug!(
        "Index pattern '{}' kept {} of {} indices",
        matcher.pattern(),
        kept.len(),
        total
    );
    Ok(kept)
}

/// Returns `true` for indices the store maintains internally.
pub fn is_internal_index(name: &str) -> bool {
    INTERNAL_INDEX_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
        || name.eq_ignore_ascii_case(SECURITY_INFO_INDEX)
}

/// Drop store-internal indices from a listing.
pub fn clear_internal_indices<I>(indices: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = String>,
{
    indices
        .into_iter()
        .filter(|index| !is_internal_index(index))
        .collect()
}
