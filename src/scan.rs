//! Content directory loading.
//!
//! Walks a content root and materializes the flat record lists the tree
//! builders and the search filter consume. Nothing here groups or orders
//! records beyond the walk order; that is the job of [`crate::tree`].
//!
//! ## Directory Structure
//!
//! ```text
//! content/                               # Content root
//! ├── config.toml                        # Site configuration (optional)
//! ├── reference/                         # One JSON file per API entry
//! │   ├── shape/
//! │   │   ├── arc.json                   # name = "arc", relative_directory = "shape"
//! │   │   └── ellipse.json
//! │   └── color/
//! │       └── fill.json
//! └── examples/                          # Category/Subcategory/Example/
//!     └── Basics/
//!         └── Shape/
//!             └── Points/
//!                 ├── Points.json        # example record
//!                 ├── Points.pde         # ignored
//!                 └── Points.png         # preview image
//! ```
//!
//! ## Ordering
//!
//! Directories are walked depth-first with entries sorted by file name, so
//! the same content always yields records in the same order. Hidden entries
//! (leading `.`) are skipped.

use crate::config::{self, DocsConfig};
use crate::types::{ExampleDetail, ExampleRecord, ImageRecord, ReferenceDetail, ReferenceRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Content directory not found: {0}")]
    MissingDirectory(PathBuf),
}

/// Everything loaded from a content root.
#[derive(Debug, Serialize)]
pub struct Content {
    pub references: Vec<ReferenceRecord>,
    pub examples: Vec<ExampleRecord>,
    pub images: Vec<ImageRecord>,
    pub config: DocsConfig,
}

pub const REFERENCE_DIR: &str = "reference";
pub const EXAMPLES_DIR: &str = "examples";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Load config and all records under `root`.
///
/// Missing `reference/` or `examples/` directories yield empty lists.
pub fn scan(root: &Path) -> Result<Content, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingDirectory(root.to_path_buf()));
    }
    let config = config::load_config(root)?;
    let references = scan_references(&root.join(REFERENCE_DIR))?;
    let (examples, images) = scan_examples(&root.join(EXAMPLES_DIR))?;

    Ok(Content {
        references,
        examples,
        images,
        config,
    })
}

/// Load every `*.json` file under `dir` as a reference record.
pub fn scan_references(dir: &Path) -> Result<Vec<ReferenceRecord>, ScanError> {
    let mut records = Vec::new();
    for entry in walk_files(dir)? {
        let path = entry.path();
        if !has_extension(path, &["json"]) {
            continue;
        }
        let detail: ReferenceDetail = read_json(path)?;
        records.push(ReferenceRecord {
            name: file_stem(path),
            relative_directory: relative_directory(path, dir),
            detail,
        });
    }
    Ok(records)
}

/// Load example records (`*.json`) and preview images under `dir`.
pub fn scan_examples(dir: &Path) -> Result<(Vec<ExampleRecord>, Vec<ImageRecord>), ScanError> {
    let mut examples = Vec::new();
    let mut images = Vec::new();
    for entry in walk_files(dir)? {
        let path = entry.path();
        if has_extension(path, &["json"]) {
            let detail: ExampleDetail = read_json(path)?;
            examples.push(ExampleRecord {
                name: file_stem(path),
                relative_directory: relative_directory(path, dir),
                detail,
            });
        } else if has_extension(path, IMAGE_EXTENSIONS) {
            images.push(ImageRecord {
                name: file_stem(path),
                relative_directory: relative_directory(path, dir),
                extension: path
                    .extension()
                    .map(|e| e.to_string_lossy().to_string())
                    .unwrap_or_default(),
            });
        }
    }
    Ok((examples, images))
}

/// Sorted, non-hidden files under `dir`. Empty when `dir` does not exist.
fn walk_files(dir: &Path) -> Result<Vec<DirEntry>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry);
        }
    }
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Parent directory of `path` relative to `root`, `/`-separated.
fn relative_directory(path: &Path, root: &Path) -> String {
    path.parent()
        .and_then(|p| p.strip_prefix(root).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScanError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ScanError::Json {
        path: path.to_path_buf(),
        source,
    })
}
