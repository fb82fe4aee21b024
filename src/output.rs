//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (category, record, example) is its semantic identity —
//! display name and positional index — with source files shown as secondary
//! context via indented `Source:` lines.
//!
//! # Entity Display Contract
//!
//! Every entity follows the same two-level pattern:
//!
//! 1. **Header line**: positional index + display name (+ optional detail
//!    like item count or kind)
//! 2. **Context lines**: indented `Source:`, `Description:`, `Image:`
//!
//! # Output Format
//!
//! ## Reference tree
//!
//! ```text
//! Reference
//! 001 Color (3 items)
//!     001 Setting
//!         001 fill() (function)
//!             Source: color/setting/fill.json
//!             Description: Sets the color used to fill shapes.
//! 002 Shape (3 items)
//!     001 2d Primitives
//!         001 arc() (function)
//!             Source: shape/2d_primitives/arc.json
//!     002 createShape() (function)
//!         Source: shape/createShape.json
//! ```
//!
//! Records without a subcategory are listed directly under their category.
//!
//! ## Example tree
//!
//! ```text
//! Examples
//! 001 Basics (3 examples)
//!     001 Shape
//!         001 Points
//!             Source: Basics/Shape/Points/
//!             Image: Points.png
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::scan::Content;
use crate::trail::Crumb;
use crate::types::{
    CategoryNode, ExampleLeaf, ExampleRecord, ReferenceDetail, ReferenceLeaf, ReferenceRecord,
    leaf_count,
};
use serde_json::{Map, Value};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + name, with optional detail.
///
/// ```text
/// 001 Shape (12 items)
/// 001 arc() (function)
/// 001 2d Primitives
/// ```
fn entity_header(index: usize, name: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), name, d),
        None => format!("{} {}", format_index(index), name),
    }
}

/// `1 item`, `3 items`.
fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

/// `Description:` context line for records carrying a `description` string.
fn description_line(extra: &Map<String, Value>, depth: usize, width: usize) -> Option<String> {
    let desc = extra.get("description")?.as_str()?;
    let plain = strip_html_tags(desc);
    let truncated = truncate_desc(plain.trim(), width);
    if truncated.is_empty() {
        None
    } else {
        Some(format!("{}Description: {}", indent(depth), truncated))
    }
}

/// Source file of a reference record, relative to the reference root.
fn reference_source(dir: &str, slug: &str) -> String {
    if dir.is_empty() {
        format!("{slug}.json")
    } else {
        format!("{dir}/{slug}.json")
    }
}

fn reference_lines(
    index: usize,
    slug: &str,
    dir: &str,
    detail: &ReferenceDetail,
    depth: usize,
    width: usize,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{}{}",
        indent(depth),
        entity_header(index, &detail.name, detail.kind.as_deref())
    )];
    lines.push(format!(
        "{}Source: {}",
        indent(depth + 1),
        reference_source(dir, slug)
    ));
    if let Some(anchor) = &detail.classanchor {
        lines.push(format!("{}Class: {}", indent(depth + 1), anchor));
    }
    lines.extend(description_line(&detail.extra, depth + 1, width));
    lines
}

// ============================================================================
// Reference tree
// ============================================================================

/// Format the reference tree as an inventory.
pub fn format_reference_tree(tree: &[CategoryNode<ReferenceLeaf>], width: usize) -> Vec<String> {
    let mut lines = vec!["Reference".to_string()];

    for (ci, category) in tree.iter().enumerate() {
        let count: usize = category.children.iter().map(|s| s.children.len()).sum();
        lines.push(entity_header(
            ci + 1,
            &category.name,
            Some(plural(count, "item", "items").as_str()),
        ));

        let mut position = 0;
        for subcategory in &category.children {
            if subcategory.name.is_empty() {
                // Uncategorized records sit beside the subcategories
                for leaf in &subcategory.children {
                    position += 1;
                    lines.extend(reference_lines(
                        position,
                        &leaf.slug,
                        &leaf.dir,
                        &leaf.detail,
                        1,
                        width,
                    ));
                }
                continue;
            }
            position += 1;
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(position, &subcategory.name, None)
            ));
            for (li, leaf) in subcategory.children.iter().enumerate() {
                lines.extend(reference_lines(
                    li + 1,
                    &leaf.slug,
                    &leaf.dir,
                    &leaf.detail,
                    2,
                    width,
                ));
            }
        }
    }

    lines
}

/// Print the reference tree to stdout.
pub fn print_reference_tree(tree: &[CategoryNode<ReferenceLeaf>], width: usize) {
    for line in format_reference_tree(tree, width) {
        println!("{}", line);
    }
}

// ============================================================================
// Example tree
// ============================================================================

fn example_leaf_lines(index: usize, leaf: &ExampleLeaf, depth: usize, width: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "{}{}",
        indent(depth),
        entity_header(index, &leaf.name, None)
    )];
    lines.push(format!("{}Source: {}/", indent(depth + 1), leaf.dir));
    if let Some(image) = &leaf.image {
        lines.push(format!("{}Image: {}", indent(depth + 1), image.file_name()));
    }
    lines.extend(description_line(&leaf.extra, depth + 1, width));
    lines
}

/// Format the example tree as an inventory.
pub fn format_example_tree(tree: &[CategoryNode<ExampleLeaf>], width: usize) -> Vec<String> {
    let mut lines = vec!["Examples".to_string()];

    for (ci, category) in tree.iter().enumerate() {
        let count: usize = category.children.iter().map(|s| s.children.len()).sum();
        lines.push(entity_header(
            ci + 1,
            &category.name,
            Some(plural(count, "example", "examples").as_str()),
        ));

        for (si, subcategory) in category.children.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(si + 1, &subcategory.name, None)
            ));
            for (li, leaf) in subcategory.children.iter().enumerate() {
                lines.extend(example_leaf_lines(li + 1, leaf, 2, width));
            }
        }
    }

    lines
}

/// Print the example tree to stdout.
pub fn print_example_tree(tree: &[CategoryNode<ExampleLeaf>], width: usize) {
    for line in format_example_tree(tree, width) {
        println!("{}", line);
    }
}

// ============================================================================
// Search results
// ============================================================================

fn match_summary(query: &str, shown: usize, total: usize) -> String {
    format!("Search \"{}\": {} of {}", query, shown, plural(total, "record", "records"))
}

/// Format matching reference records.
pub fn format_reference_matches(
    query: &str,
    matches: &[ReferenceRecord],
    total: usize,
    width: usize,
) -> Vec<String> {
    let mut lines = vec![match_summary(query, matches.len(), total)];
    for (i, record) in matches.iter().enumerate() {
        lines.extend(reference_lines(
            i + 1,
            &record.name,
            &record.relative_directory,
            &record.detail,
            0,
            width,
        ));
    }
    lines
}

/// Format matching example records.
pub fn format_example_matches(
    query: &str,
    matches: &[ExampleRecord],
    total: usize,
    width: usize,
) -> Vec<String> {
    let mut lines = vec![match_summary(query, matches.len(), total)];
    for (i, record) in matches.iter().enumerate() {
        lines.extend(example_record_lines(i + 1, record, width));
    }
    lines
}

fn example_record_lines(index: usize, record: &ExampleRecord, width: usize) -> Vec<String> {
    let mut lines = vec![entity_header(index, &record.detail.name, None)];
    lines.push(format!(
        "{}Source: {}/",
        indent(1),
        record.relative_directory
    ));
    lines.extend(description_line(&record.detail.extra, 1, width));
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Trail and featured examples
// ============================================================================

/// Format a breadcrumb trail as labels and a slug path.
///
/// ```text
/// Processing → Shape → 2d Primitives
///     Path: processing/shape/2d_primitives
/// ```
pub fn format_trail(crumbs: &[Crumb]) -> Vec<String> {
    let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
    let slugs: Vec<&str> = crumbs.iter().map(|c| c.slug.as_str()).collect();
    vec![
        labels.join(" \u{2192} "),
        format!("{}Path: {}", indent(1), slugs.join("/")),
    ]
}

/// Format a featured example selection.
pub fn format_featured(picked: &[ExampleRecord], total: usize, width: usize) -> Vec<String> {
    let mut lines = vec![format!(
        "Featured examples ({} of {})",
        picked.len(),
        total
    )];
    for (i, record) in picked.iter().enumerate() {
        lines.extend(example_record_lines(i + 1, record, width));
    }
    lines
}

// ============================================================================
// Check
// ============================================================================

/// Format a content summary: record counts per section.
pub fn format_check_output(
    content: &Content,
    reference_tree: &[CategoryNode<ReferenceLeaf>],
    example_tree: &[CategoryNode<ExampleLeaf>],
    has_config_file: bool,
) -> Vec<String> {
    let mut lines = vec!["Reference".to_string()];
    lines.push(format!(
        "{}{} in {}",
        indent(1),
        plural(content.references.len(), "record", "records"),
        plural(reference_tree.len(), "category", "categories")
    ));

    lines.push("Examples".to_string());
    let with_image = example_tree
        .iter()
        .flat_map(|c| &c.children)
        .flat_map(|s| &s.children)
        .filter(|l| l.image.is_some())
        .count();
    lines.push(format!(
        "{}{} in {}, {} with images",
        indent(1),
        plural(leaf_count(example_tree), "example", "examples"),
        plural(example_tree.len(), "category", "categories"),
        with_image
    ));

    lines.push("Config".to_string());
    if has_config_file {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::tree::{
        ExampleTreeOptions, Grouping, build_example_tree, build_example_tree_with,
        build_reference_tree,
    };

    #[test]
    fn format_index_pads_to_three() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn truncate_desc_respects_char_boundaries() {
        assert_eq!(truncate_desc("short", 10), "short");
        assert_eq!(truncate_desc("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn strip_html_tags_removes_markup() {
        assert_eq!(
            strip_html_tags("Draws an <b>arc</b> to the <a href=\"x\">screen</a>."),
            "Draws an arc to the screen."
        );
    }

    #[test]
    fn reference_tree_output_shape() {
        let mut arc = reference("arc", "shape", "2d_primitives");
        arc.relative_directory = "shape/2d_primitives".into();
        arc.detail.name = "arc()".into();
        arc.detail
            .extra
            .insert("description".into(), "Draws an <b>arc</b>.".into());
        let mut create = reference("createShape", "Shape", "");
        create.relative_directory = "shape".into();

        let tree = build_reference_tree(&[arc, create]);
        let lines = format_reference_tree(&tree, 72);

        assert_eq!(
            lines,
            vec![
                "Reference",
                "001 Shape (2 items)",
                "    001 2d Primitives",
                "        001 arc() (function)",
                "            Source: shape/2d_primitives/arc.json",
                "            Description: Draws an arc.",
                "    002 createShape() (function)",
                "        Source: shape/createShape.json",
            ]
        );
    }

    #[test]
    fn class_members_show_their_class() {
        let mut add = reference("PVector_add_", "math", "");
        add.detail.kind = Some("method".into());
        add.detail.classanchor = Some("PVector".into());
        let lines = format_reference_matches("add", &[add], 5, 72);

        assert_eq!(lines[0], "Search \"add\": 1 of 5 records");
        assert_eq!(lines[1], "001 PVector_add_() (method)");
        assert!(lines.contains(&"    Class: PVector".to_string()));
    }

    #[test]
    fn example_tree_output_shape() {
        let records = vec![example("Points", "Basics/Shape/Points")];
        let images = vec![image("Points", "Basics/Shape/Points", "png")];
        let tree = build_example_tree(&records, &images);
        let lines = format_example_tree(&tree, 72);

        assert_eq!(
            lines,
            vec![
                "Examples",
                "001 Basics (1 example)",
                "    001 Shape",
                "        001 Points",
                "            Source: Basics/Shape/Points/",
                "            Image: Points.png",
            ]
        );
    }

    #[test]
    fn example_source_is_the_record_directory() {
        let records = vec![
            example("Points", "Basics/Shape/Points"),
            example("Lines", "basics/shape/Lines"),
            example("Intro", "Basics"),
        ];
        let options = ExampleTreeOptions {
            grouping: Grouping::CaseInsensitive,
            ..Default::default()
        };
        let tree = build_example_tree_with(&records, &[], &options);
        let lines = format_example_tree(&tree, 72);

        assert!(lines.contains(&"            Source: basics/shape/Lines/".to_string()));
        assert!(lines.contains(&"            Source: Basics/".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Basics/Shape/Lines")));
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let mut record = example("Flocking", "Topics/Simulate/Flocking");
        record
            .detail
            .extra
            .insert("description".into(), "x".repeat(100).into());
        let lines = format_example_matches("flock", &[record], 1, 10);
        assert_eq!(lines[3], format!("    Description: {}...", "x".repeat(10)));
    }

    #[test]
    fn trail_output() {
        let crumbs = vec![
            Crumb {
                label: "Processing".into(),
                slug: "processing".into(),
            },
            Crumb {
                label: "Shape".into(),
                slug: "shape".into(),
            },
        ];
        assert_eq!(
            format_trail(&crumbs),
            vec!["Processing \u{2192} Shape", "    Path: processing/shape"]
        );
    }

    #[test]
    fn featured_output_header() {
        let picked = vec![example("Hue", "Basics/Color/Hue")];
        let lines = format_featured(&picked, 4, 72);
        assert_eq!(lines[0], "Featured examples (1 of 4)");
        assert_eq!(lines[1], "001 Hue");
    }
}
