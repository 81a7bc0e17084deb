//! Content scan patterns.
//!
//! The `content` key lists glob patterns naming the markup files the
//! generator scans for utility class usage. Patterns are compiled at
//! validation time so a bad pattern fails the load instead of silently
//! scanning nothing.
//!
//! # Example
//!
//! ```toml
//! content = ["./templates/**/*.html", "./theme/**/*.html"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

/// Field path for diagnostics (the descriptor's top-level `content` key).
const FIELD: FieldPath = FieldPath::new("content");

/// Ordered glob patterns identifying files to scan for class usage.
///
/// Order has no effect on scan semantics but is preserved for
/// re-emission of the descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ContentConfig {
    globs: Vec<String>,
}

impl ContentConfig {
    /// Scan patterns in declaration order.
    pub fn globs(&self) -> &[String] {
        &self.globs
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    /// Compile the patterns into a single matcher for the scanner.
    ///
    /// `*` is allowed to cross path separators so `./templates/*.html`
    /// style patterns behave the way descriptor authors expect.
    pub fn glob_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.globs {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(false)
                .build()
                .with_context(|| format!("invalid content glob `{pattern}`"))?;
            builder.add(glob);
        }
        builder.build().context("failed to compile content globs")
    }

    /// Validate scan patterns.
    ///
    /// # Checks
    /// - every pattern is a non-empty string
    /// - every pattern compiles as a glob
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.globs.is_empty() {
            diag.hint(
                FIELD,
                "no content globs configured, the generator will scan nothing",
            );
            return;
        }

        for (index, pattern) in self.globs.iter().enumerate() {
            if pattern.is_empty() {
                diag.error(FIELD, format!("pattern at index {index} is empty"));
                continue;
            }
            if let Err(err) = GlobBuilder::new(pattern).literal_separator(false).build() {
                diag.error_with_hint(
                    FIELD,
                    format!("invalid glob `{pattern}`: {err}"),
                    "fix the pattern or remove it",
                );
            }
        }
    }
}

impl From<Vec<String>> for ContentConfig {
    fn from(globs: Vec<String>) -> Self {
        Self { globs }
    }
}
