//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── reference/
//! └── examples/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! library = "processing"    # Library name, root of every breadcrumb trail
//!
//! [examples]
//! separator = "/"           # Separator in example directories
//! grouping = "exact"        # "exact" or "case-insensitive"
//!
//! [output]
//! description_width = 72    # Truncate descriptions in CLI output
//!
//! [featured]
//! count = 6                 # Examples picked by `refshelf featured`
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::tree::{ExampleTreeOptions, Grouping};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Library name used as the first breadcrumb.
    pub library: String,
    /// How example directories are split and grouped.
    pub examples: ExamplesConfig,
    /// CLI output settings.
    pub output: OutputConfig,
    /// Featured example selection.
    pub featured: FeaturedConfig,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            library: "processing".to_string(),
            examples: ExamplesConfig::default(),
            output: OutputConfig::default(),
            featured: FeaturedConfig::default(),
        }
    }
}

impl DocsConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.library.trim().is_empty() {
            return Err(ConfigError::Validation("library must not be empty".into()));
        }
        if self.examples.separator.is_empty() {
            return Err(ConfigError::Validation(
                "examples.separator must not be empty".into(),
            ));
        }
        if self.output.description_width == 0 {
            return Err(ConfigError::Validation(
                "output.description_width must be non-zero".into(),
            ));
        }
        if self.featured.count == 0 {
            return Err(ConfigError::Validation(
                "featured.count must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Example tree settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExamplesConfig {
    /// Separator between category, subcategory and example name.
    pub separator: String,
    /// Directory segment comparison when grouping.
    pub grouping: Grouping,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
            grouping: Grouping::Exact,
        }
    }
}

impl ExamplesConfig {
    pub fn tree_options(&self) -> ExampleTreeOptions {
        ExampleTreeOptions {
            separator: self.separator.clone(),
            grouping: self.grouping,
        }
    }
}

/// CLI output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Maximum characters of a description shown before `...`.
    pub description_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            description_width: 72,
        }
    }
}

/// Featured example settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturedConfig {
    /// Number of examples to pick.
    pub count: usize,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self { count: 6 }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(DocsConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<DocsConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: DocsConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<DocsConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# refshelf Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Library name. Used as the first crumb of every breadcrumb trail.
library = "processing"

# ---------------------------------------------------------------------------
# Examples
# ---------------------------------------------------------------------------
[examples]
# Separator between the Category/Subcategory/ExampleName parts of an
# example's directory.
separator = "/"

# How directory parts are compared when grouping examples:
#   "exact"            - case-sensitive, "Basics" and "basics" are two groups
#   "case-insensitive" - merged, first-seen spelling is displayed
grouping = "exact"

# ---------------------------------------------------------------------------
# CLI output
# ---------------------------------------------------------------------------
[output]
# Descriptions longer than this are cut and suffixed with "...".
description_width = 72

# ---------------------------------------------------------------------------
# Featured examples
# ---------------------------------------------------------------------------
[featured]
# Number of random examples printed by `refshelf featured`.
count = 6
"##
}
