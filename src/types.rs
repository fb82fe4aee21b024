//! Record and tree types shared by the loader, the tree builders, and output.
//!
//! Records are what the content loader produces: one per JSON file (or image
//! file) found under the content root. Trees are what the builders produce.
//! Both serialize to JSON for the `--json` CLI output.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One documentable API entry (class, function, field, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Identifier: the record's file stem (e.g. `arc`, `PVector_add_`).
    pub name: String,
    /// Directory of the record relative to the reference root.
    #[serde(default)]
    pub relative_directory: String,
    /// Parsed JSON content of the record.
    pub detail: ReferenceDetail,
}

/// The JSON body of a reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDetail {
    /// Display name (e.g. `arc()`).
    pub name: String,
    pub category: String,
    /// Empty when the entry has no subcategory (absent or `null`).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subcategory: String,
    /// Entry kind as written (`function`, `class`, `method`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Name of the owning class for class members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classanchor: Option<String>,
    /// Everything else in the record (description, syntax, parameters, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One runnable code example.
///
/// `relative_directory` has the form `Category/Subcategory/ExampleName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub name: String,
    #[serde(default)]
    pub relative_directory: String,
    pub detail: ExampleDetail,
}

/// The JSON body of an example record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleDetail {
    /// Display name (e.g. `Points`).
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A preview image found next to an example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// File stem.
    pub name: String,
    pub relative_directory: String,
    pub extension: String,
}

impl ImageRecord {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// A grouping node: category or subcategory, with ordered children.
///
/// Reference trees and example trees share this shape; only the leaf type
/// differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode<C> {
    /// Grouping key. Empty for the "no subcategory" group.
    pub slug: String,
    /// Display name. Empty for the "no subcategory" group.
    pub name: String,
    pub children: Vec<C>,
}

impl<C> TreeNode<C> {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }
}

/// A top-level category holding subcategories.
pub type CategoryNode<L> = TreeNode<SubcategoryNode<L>>;

/// A subcategory holding leaves.
pub type SubcategoryNode<L> = TreeNode<L>;

/// A reference record placed in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLeaf {
    /// The record's identifier.
    pub slug: String,
    /// The record's relative directory.
    pub dir: String,
    #[serde(flatten)]
    pub detail: ReferenceDetail,
}

/// An example record placed in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleLeaf {
    /// Third segment of the example's directory.
    pub slug: String,
    /// The record's relative directory, as found on disk.
    pub dir: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Count leaves across a two-level tree.
pub fn leaf_count<L>(tree: &[CategoryNode<L>]) -> usize {
    tree.iter()
        .flat_map(|c| &c.children)
        .map(|s| s.children.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_record_parses_minimal_json() {
        let json = r#"{
            "name": "arc",
            "relative_directory": "shape",
            "detail": { "name": "arc()", "category": "shape", "type": "function" }
        }"#;
        let record: ReferenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.detail.subcategory, "");
        assert_eq!(record.detail.kind.as_deref(), Some("function"));
        assert!(record.detail.extra.is_empty());
    }

    #[test]
    fn unlisted_kind_is_kept_verbatim() {
        let json = r#"{ "name": "x", "category": "c", "type": "keyword" }"#;
        let detail: ReferenceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.kind.as_deref(), Some("keyword"));

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["type"], "keyword");
    }

    #[test]
    fn missing_kind_is_not_serialized() {
        let json = r#"{ "name": "x", "category": "c" }"#;
        let detail: ReferenceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.kind, None);

        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("type").is_none());
    }

    #[test]
    fn null_subcategory_is_empty() {
        let json = r#"{ "name": "x", "category": "shape", "subcategory": null }"#;
        let detail: ReferenceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.subcategory, "");
    }

    #[test]
    fn extra_fields_are_kept() {
        let json = r#"{ "name": "x", "category": "c", "description": "Draws", "syntax": ["x()"] }"#;
        let detail: ReferenceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.extra["description"], "Draws");
        assert_eq!(detail.extra.len(), 2);
    }

    #[test]
    fn reference_leaf_flattens_detail() {
        let leaf = ReferenceLeaf {
            slug: "arc".into(),
            dir: "shape".into(),
            detail: ReferenceDetail {
                name: "arc()".into(),
                category: "shape".into(),
                subcategory: String::new(),
                kind: Some("function".into()),
                classanchor: None,
                extra: Map::new(),
            },
        };
        let value = serde_json::to_value(&leaf).unwrap();
        assert_eq!(value["slug"], "arc");
        assert_eq!(value["name"], "arc()");
        assert_eq!(value["type"], "function");
        assert!(value.get("classanchor").is_none());
    }

    #[test]
    fn image_file_name_joins_extension() {
        let image = ImageRecord {
            name: "Points".into(),
            relative_directory: "Basics/Shape/Points".into(),
            extension: "png".into(),
        };
        assert_eq!(image.file_name(), "Points.png");
    }
}
