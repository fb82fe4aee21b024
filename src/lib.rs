//! # refshelf
//!
//! Organizes the documentation records of a creative-coding library (API
//! reference entries, runnable examples, preview images) into navigable,
//! searchable structures for a documentation site.
//!
//! # Architecture: Load, Organize, Display
//!
//! ```text
//! 1. Load      content/      →  flat records     (JSON files + images → Vec<Record>)
//! 2. Organize  flat records  →  trees / matches  (pure functions)
//! 3. Display   trees         →  stdout           (inventory lines or JSON)
//! ```
//!
//! The organizing step is the core of the crate and is deliberately free of
//! I/O: every builder and filter takes slices and returns new values, so the
//! same functions serve the CLI, a site generator, or a test.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Slug → display title (`2d_primitives` → "2d Primitives") |
//! | [`tree`] | Category/subcategory trees for reference entries and examples |
//! | [`search`] | Multi-term, case-insensitive substring filter |
//! | [`trail`] | Breadcrumb trails for reference pages |
//! | [`shuffle`] | In-place shuffle and featured example selection |
//! | [`types`] | Records and tree nodes shared by all modules |
//! | [`scan`] | Loads records from a content directory |
//! | [`config`] | `config.toml` loading, validation, and merging |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## First-Seen Order, Never Sorted
//!
//! Trees keep the order in which categories, subcategories and records first
//! appear. Upstream tooling already emits records in the order the docs
//! should read; sorting here would override that choice.
//!
//! ## Two Grouping Rules
//!
//! Reference categories come from hand-written JSON fields and are merged
//! case-insensitively (`Shape` and `shape` are one category). Example
//! categories come from directory names and are compared exactly, since two
//! directories that differ only in case are two directories. The
//! [`tree::Grouping`] option unifies the two when a site wants that.

pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod search;
pub mod shuffle;
pub mod trail;
pub mod tree;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
