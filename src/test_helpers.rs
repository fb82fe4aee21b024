//! Shared test utilities for the refshelf test suite.
//!
//! Provides record builders, lookup helpers, and tree shape assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let records = vec![
//!     reference("arc", "shape", "2d_primitives"),
//!     reference("fill", "color", "setting"),
//! ];
//! let tree = build_reference_tree(&records);
//!
//! assert_tree_shape(&tree, &[
//!     ("Shape", &["2d Primitives"]),
//!     ("Color", &["Setting"]),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{
    CategoryNode, ExampleDetail, ExampleRecord, ImageRecord, ReferenceDetail,
    ReferenceRecord,
};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Record builders
// =========================================================================

/// A function reference record named `name`, displayed as `name()`.
pub fn reference(name: &str, category: &str, subcategory: &str) -> ReferenceRecord {
    ReferenceRecord {
        name: name.to_string(),
        relative_directory: category.to_lowercase(),
        detail: ReferenceDetail {
            name: format!("{name}()"),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            kind: Some("function".to_string()),
            classanchor: None,
            extra: Default::default(),
        },
    }
}

/// An example record at `dir` (e.g. `Basics/Shape/Points`).
pub fn example(name: &str, dir: &str) -> ExampleRecord {
    ExampleRecord {
        name: name.to_string(),
        relative_directory: dir.to_string(),
        detail: ExampleDetail {
            name: name.to_string(),
            extra: Default::default(),
        },
    }
}

pub fn image(name: &str, dir: &str, extension: &str) -> ImageRecord {
    ImageRecord {
        name: name.to_string(),
        relative_directory: dir.to_string(),
        extension: extension.to_string(),
    }
}

// =========================================================================
// Lookups — panics with a clear message on miss
// =========================================================================

/// Find a reference record by identifier. Panics if not found.
pub fn find_reference<'a>(records: &'a [ReferenceRecord], name: &str) -> &'a ReferenceRecord {
    records.iter().find(|r| r.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        panic!("reference '{name}' not found. Available: {names:?}")
    })
}

/// Find an example record by identifier. Panics if not found.
pub fn find_example<'a>(records: &'a [ExampleRecord], name: &str) -> &'a ExampleRecord {
    records.iter().find(|r| r.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        panic!("example '{name}' not found. Available: {names:?}")
    })
}

/// Find a category by display name. Panics if not found.
pub fn find_category<'a, L>(tree: &'a [CategoryNode<L>], name: &str) -> &'a CategoryNode<L> {
    tree.iter().find(|c| c.name == name).unwrap_or_else(|| {
        let names = category_names(tree);
        panic!("category '{name}' not found. Available: {names:?}")
    })
}

// =========================================================================
// Tree helpers
// =========================================================================

/// Category display names in tree order.
pub fn category_names<L>(tree: &[CategoryNode<L>]) -> Vec<&str> {
    tree.iter().map(|c| c.name.as_str()).collect()
}

/// Subcategory display names under a category. Panics if not found.
pub fn subcategory_names<'a, L>(tree: &'a [CategoryNode<L>], category: &str) -> Vec<&'a str> {
    find_category(tree, category)
        .children
        .iter()
        .map(|s| s.name.as_str())
        .collect()
}

/// Assert that a two-level tree matches an expected shape.
///
/// Each entry is `(category, subcategories)` using display names.
pub fn assert_tree_shape<L>(tree: &[CategoryNode<L>], expected: &[(&str, &[&str])]) {
    let expected_names: Vec<&str> = expected.iter().map(|(n, _)| *n).collect();
    assert_eq!(
        category_names(tree),
        expected_names,
        "category names mismatch"
    );

    for (name, children) in expected {
        assert_eq!(
            subcategory_names(tree, name),
            children.to_vec(),
            "subcategories of '{name}' mismatch"
        );
    }
}
