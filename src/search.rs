//! Free-text filtering for the reference and example index pages.
//!
//! A query is split on whitespace into terms. An item survives when **every**
//! term occurs somewhere in its search text, compared case-insensitively as a
//! plain substring. There is no tokenization, fuzzing, or ranking: the result
//! is the input with non-matching items removed, in the original order.
//!
//! ## Search Text
//!
//! An item's search text is its JSON serialization, lowercased. Records that
//! carry a nested `detail` object (the parsed documentation JSON) are searched
//! on the *values* of that object only, so that field names like `category`
//! or `description` do not match every record.
//!
//! ```text
//! {"name":"arc","detail":{"name":"arc()","category":"shape"}}
//!   → ["arc()","shape"]
//! ```

use crate::types::{ExampleRecord, ReferenceRecord};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// Something that can be matched against search terms.
pub trait Searchable {
    /// Lowercased text that query terms are matched against.
    fn search_text(&self) -> String;
}

/// Lowercased JSON search text for a serialized item.
///
/// Objects with an object-valued `detail` key are reduced to the array of
/// that object's values first.
pub fn json_search_text(value: &Value) -> String {
    let text = match value.get("detail") {
        Some(Value::Object(detail)) => {
            Value::Array(detail.values().cloned().collect()).to_string()
        }
        _ => value.to_string(),
    };
    text.to_lowercase()
}

fn serialized_search_text<T: Serialize>(item: &T) -> String {
    serde_json::to_value(item)
        .map(|value| json_search_text(&value))
        .unwrap_or_default()
}

impl Searchable for Value {
    fn search_text(&self) -> String {
        json_search_text(self)
    }
}

impl Searchable for ReferenceRecord {
    fn search_text(&self) -> String {
        serialized_search_text(self)
    }
}

impl Searchable for ExampleRecord {
    fn search_text(&self) -> String {
        serialized_search_text(self)
    }
}

/// Whether `item` contains every term of an already-split query.
pub fn matches_all<T: Searchable + ?Sized>(item: &T, terms: &[String]) -> bool {
    let text = item.search_text();
    terms.iter().all(|term| text.contains(term.as_str()))
}

/// Lowercased whitespace-separated terms of a query.
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Keep the items matching every term of `query`, in input order.
///
/// An empty query returns the input itself, borrowed and unchanged.
pub fn filter_items<'a, T>(items: &'a [T], query: &str) -> Cow<'a, [T]>
where
    T: Searchable + Clone,
{
    if query.is_empty() {
        return Cow::Borrowed(items);
    }
    let terms = query_terms(query);
    Cow::Owned(
        items
            .iter()
            .filter(|item| matches_all(*item, &terms))
            .cloned()
            .collect(),
    )
}
