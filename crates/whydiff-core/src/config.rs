//! Explainer configuration.
//!
//! Callers hand the explainer a partial [`ExplainOptions`]; it is resolved
//! onto the defaults exactly once per top-level call, and the resulting
//! [`ExplainConfig`] is shared read-only by every recursive step.

use crate::errors::{Result, WhyDiffError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_MAX_DEPTH: i32 = 6;
pub const DEFAULT_TREAT_TOP_LEVEL_AS_SHALLOW_COMPARABLE: bool = true;
pub const DEFAULT_EXCLUDED_FIELD_NAMES: &[&str] = &["_owner"];

/// Partial configuration; unset fields fall back to the defaults
///
/// Also the on-disk format of an options file:
///
/// ```toml
/// max_depth = 4
/// treat_top_level_as_shallow_comparable = false
/// excluded_field_names = ["_owner", "ref"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplainOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treat_top_level_as_shallow_comparable: Option<bool>,
    /// Replaces the default set when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_field_names: Option<BTreeSet<String>>,
}

impl ExplainOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_top_level_shallow_comparable(mut self, enabled: bool) -> Self {
        self.treat_top_level_as_shallow_comparable = Some(enabled);
        self
    }

    pub fn with_excluded_field_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_field_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win
    pub fn merge(self, overrides: ExplainOptions) -> ExplainOptions {
        ExplainOptions {
            max_depth: overrides.max_depth.or(self.max_depth),
            treat_top_level_as_shallow_comparable: overrides
                .treat_top_level_as_shallow_comparable
                .or(self.treat_top_level_as_shallow_comparable),
            excluded_field_names: overrides
                .excluded_field_names
                .or(self.excluded_field_names),
        }
    }

    /// Fill every unset field from the defaults
    pub fn resolve(&self) -> ExplainConfig {
        ExplainConfig {
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            treat_top_level_as_shallow_comparable: self
                .treat_top_level_as_shallow_comparable
                .unwrap_or(DEFAULT_TREAT_TOP_LEVEL_AS_SHALLOW_COMPARABLE),
            excluded_field_names: self.excluded_field_names.clone().unwrap_or_else(|| {
                DEFAULT_EXCLUDED_FIELD_NAMES
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            }),
        }
    }

    /// Parse an options document
    ///
    /// # Errors
    ///
    /// `InvalidOptions` on malformed TOML, wrong value types or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse an options file
    ///
    /// # Errors
    ///
    /// `Read` when the file cannot be read, otherwise as [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| WhyDiffError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}

/// Resolved, immutable configuration for one top-level comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainConfig {
    max_depth: i32,
    treat_top_level_as_shallow_comparable: bool,
    excluded_field_names: BTreeSet<String>,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        ExplainOptions::default().resolve()
    }
}

impl ExplainConfig {
    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    pub fn treats_top_level_as_shallow_comparable(&self) -> bool {
        self.treat_top_level_as_shallow_comparable
    }

    pub fn excluded_field_names(&self) -> &BTreeSet<String> {
        &self.excluded_field_names
    }

    pub fn is_excluded(&self, field: &str) -> bool {
        self.excluded_field_names.contains(field)
    }

    /// A negative ceiling counts as already reached at depth 0
    pub fn depth_limit_reached(&self, depth: usize) -> bool {
        i64::try_from(depth).unwrap_or(i64::MAX) >= i64::from(self.max_depth)
    }
}
