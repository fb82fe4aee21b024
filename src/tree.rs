//! Category/subcategory trees for the sidebar navigation.
//!
//! Both builders turn a flat, ordered list of records into a two-level tree:
//!
//! ```text
//! Shape                      ← category
//! ├── 2d Primitives          ← subcategory
//! │   ├── arc()              ← leaf (one per record)
//! │   └── ellipse()
//! └── (no subcategory)       ← empty-slug group for records without one
//!     └── createShape()
//! ```
//!
//! ## Ordering
//!
//! Nothing is sorted. Categories, subcategories and leaves appear in the order
//! they are first seen in the input, so the caller controls ordering by
//! ordering the records. Building twice from the same input yields the same
//! tree.
//!
//! ## Grouping Keys
//!
//! The two builders group differently:
//!
//! - **Reference records** group case-insensitively on their `category` and
//!   `subcategory` fields. The first-seen spelling decides the display name,
//!   which is title-cased with [`title_case`].
//! - **Example records** group on the raw directory segments of their
//!   `relative_directory` with exact, case-sensitive comparison, and use the
//!   raw segment as the display name. [`Grouping::CaseInsensitive`] opts into
//!   reference-style matching.
//!
//! Group lookup is a linear scan; documentation corpora have at most a few
//! hundred groups.

use crate::naming::title_case;
use crate::types::{
    CategoryNode, ExampleLeaf, ExampleRecord, ImageRecord, ReferenceLeaf, ReferenceRecord,
    TreeNode,
};
use serde::{Deserialize, Serialize};

/// How example directory segments are compared when grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// Raw, case-sensitive equality.
    #[default]
    Exact,
    /// ASCII/Unicode lowercase equality; the first-seen spelling is kept.
    CaseInsensitive,
}

impl Grouping {
    fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Grouping::Exact => a == b,
            Grouping::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Keys that describe tree position rather than the example itself.
const STRUCTURAL_KEYS: &[&str] = &[
    "category",
    "subcategory",
    "exampleName",
    "slug",
    "dir",
    "image",
];

/// Options for [`build_example_tree_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTreeOptions {
    /// Separator between `Category`, `Subcategory` and `ExampleName`.
    pub separator: String,
    pub grouping: Grouping,
}

impl Default for ExampleTreeOptions {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            grouping: Grouping::Exact,
        }
    }
}

/// Index of the child whose slug matches, creating it when absent.
fn find_or_insert<C>(
    nodes: &mut Vec<TreeNode<C>>,
    matches: impl Fn(&TreeNode<C>) -> bool,
    create: impl FnOnce() -> TreeNode<C>,
) -> usize {
    match nodes.iter().position(matches) {
        Some(index) => index,
        None => {
            nodes.push(create());
            nodes.len() - 1
        }
    }
}

/// Group reference records by category and subcategory.
///
/// Category slugs are the lowercased first-seen category; subcategory slugs
/// keep the first-seen spelling. Records without a subcategory share one
/// group with an empty slug and name.
pub fn build_reference_tree(records: &[ReferenceRecord]) -> Vec<CategoryNode<ReferenceLeaf>> {
    let mut tree: Vec<CategoryNode<ReferenceLeaf>> = Vec::new();

    for record in records {
        let category = &record.detail.category;
        let subcategory = &record.detail.subcategory;

        let category_key = category.to_lowercase();
        let ci = find_or_insert(
            &mut tree,
            |c| c.slug.to_lowercase() == category_key,
            || TreeNode::new(category_key.clone(), title_case(category)),
        );

        let subcategory_key = subcategory.to_lowercase();
        let si = find_or_insert(
            &mut tree[ci].children,
            |s| s.slug.to_lowercase() == subcategory_key,
            || TreeNode::new(subcategory.clone(), title_case(subcategory)),
        );

        tree[ci].children[si].children.push(ReferenceLeaf {
            slug: record.name.clone(),
            dir: record.relative_directory.clone(),
            detail: record.detail.clone(),
        });
    }

    tree
}

/// Group example records by the segments of their directory, with exact
/// matching and `/` separators.
pub fn build_example_tree(
    records: &[ExampleRecord],
    images: &[ImageRecord],
) -> Vec<CategoryNode<ExampleLeaf>> {
    build_example_tree_with(records, images, &ExampleTreeOptions::default())
}

/// Split a directory into `[category, subcategory, example]`.
///
/// Missing segments are empty; segments past the third are ignored.
fn split_segments<'a>(dir: &'a str, separator: &str) -> [&'a str; 3] {
    let mut parts = dir.split(separator);
    [
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
    ]
}

/// Group example records, attaching the first image in each record's
/// directory.
pub fn build_example_tree_with(
    records: &[ExampleRecord],
    images: &[ImageRecord],
    options: &ExampleTreeOptions,
) -> Vec<CategoryNode<ExampleLeaf>> {
    let mut tree: Vec<CategoryNode<ExampleLeaf>> = Vec::new();
    let grouping = options.grouping;

    for record in records {
        let image = images
            .iter()
            .find(|img| img.relative_directory == record.relative_directory)
            .cloned();
        let [category, subcategory, example] =
            split_segments(&record.relative_directory, &options.separator);

        let ci = find_or_insert(
            &mut tree,
            |c| grouping.matches(&c.name, category),
            || TreeNode::new(category, category),
        );
        let si = find_or_insert(
            &mut tree[ci].children,
            |s| grouping.matches(&s.name, subcategory),
            || TreeNode::new(subcategory, subcategory),
        );

        let mut extra = record.detail.extra.clone();
        extra.retain(|key, _| !STRUCTURAL_KEYS.contains(&key.as_str()));

        tree[ci].children[si].children.push(ExampleLeaf {
            slug: example.to_string(),
            dir: record.relative_directory.clone(),
            name: record.detail.name.clone(),
            image,
            extra,
        });
    }

    tree
}
