//! Breadcrumb trails for reference pages.
//!
//! A trail walks from the library root down to the entry's group:
//!
//! ```text
//! Processing → Shape → 2d Primitives              (arc)
//! Processing → Data → Composite → PVector         (PVector.add(), a class member)
//! ```
//!
//! Class members (`classanchor` set) are listed under their owning class, so
//! their category and subcategory are taken from the class record when it is
//! present in the record list.

use crate::naming::title_case;
use crate::types::ReferenceRecord;
use serde::Serialize;

/// One breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub slug: String,
}

impl Crumb {
    fn new(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: slug.into(),
        }
    }
}

/// Build the breadcrumb trail for `entry`.
///
/// `records` is searched for the owning class when `entry` is a class member.
pub fn trail(library: &str, entry: &ReferenceRecord, records: &[ReferenceRecord]) -> Vec<Crumb> {
    let anchor = entry.detail.classanchor.as_deref().filter(|a| !a.is_empty());
    let parent = anchor.and_then(|a| records.iter().find(|r| r.name == a));
    let grouping = parent.map_or(&entry.detail, |p| &p.detail);

    let mut crumbs = vec![Crumb::new(title_case(library), library)];
    if !grouping.category.is_empty() {
        crumbs.push(Crumb::new(
            title_case(&grouping.category),
            grouping.category.to_lowercase(),
        ));
    }
    if !grouping.subcategory.is_empty() {
        crumbs.push(Crumb::new(
            title_case(&grouping.subcategory),
            grouping.subcategory.as_str(),
        ));
    }
    if let Some(anchor) = anchor {
        crumbs.push(Crumb::new(anchor, anchor));
    }
    crumbs
}
