//! Descriptor management for `weft.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Descriptor section definitions
//! │   ├── content    # content scan globs
//! │   ├── plugins    # plugin references
//! │   └── theme      # [theme] and [theme.extend]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── template.rs    # starter weft.toml generation
//! ├── util.rs        # config file discovery
//! └── mod.rs         # GeneratorConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key                          | Purpose                                |
//! |------------------------------|----------------------------------------|
//! | `content`                    | Globs scanned for utility class usage  |
//! | `plugins`                    | Generator plugins, in application order|
//! | `[theme.extend.font_family]` | Font tokens merged into default theme  |

pub mod section;
pub mod template;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{ContentConfig, PluginRef, ThemeExtendConfig, ThemeSectionConfig};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config};

use crate::log;
use anyhow::{Context, Result, bail};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root descriptor
// ============================================================================

/// Root descriptor structure representing weft.toml.
///
/// Constructed once per load and never mutated afterwards; the consuming
/// generator reads it through the accessors below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Config)]
#[serde(default)]
#[config(section = "")]
pub struct GeneratorConfig {
    /// Absolute path to the descriptor file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of descriptor file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// Glob patterns for files scanned for utility class usage.
    #[config(default = "[\"./templates/**/*.html\", \"./theme/**/*.html\"]")]
    pub content: ContentConfig,

    /// Generator plugins, applied in declared order.
    #[config(default = "[\"typography\"]")]
    pub plugins: Vec<PluginRef>,

    /// Theme token overrides merged into the default theme.
    #[config(sub)]
    pub theme: ThemeSectionConfig,
}

impl GeneratorConfig {
    /// Load the descriptor, searching upward from cwd for `config_name`.
    ///
    /// The project root is the descriptor file's parent directory.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(path) = find_config_file(config_name) else {
            bail!(
                "config file '{}' not found, create one at the project root",
                config_name.display()
            );
        };
        Self::load_from(&path)
    }

    /// Load and validate the descriptor at a known path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.finalize(path);
        config.validate()?;
        Ok(config)
    }

    /// Set bookkeeping paths after parsing.
    fn finalize(&mut self, path: &Path) {
        self.config_path = path.to_path_buf();
        self.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    }

    /// Parse a descriptor from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load the descriptor from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the descriptor sits at the project root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Re-emit the loaded descriptor as TOML.
    ///
    /// The output parses back to a descriptor equal to this one.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize descriptor")
    }

    // ========================================================================
    // read-only access
    // ========================================================================

    /// Scan patterns in declaration order.
    pub fn content_globs(&self) -> &[String] {
        self.content.globs()
    }

    /// Theme overrides; the consuming generator merges them into its
    /// default theme.
    pub fn theme_extensions(&self) -> &ThemeExtendConfig {
        &self.theme.extend
    }

    /// Plugin list in application order.
    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the descriptor.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate(&mut diag);
        self.theme.validate(&mut diag);
        section::plugins::validate(&self.plugins, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_parse_config`)
// ============================================================================

/// Parse a descriptor string.
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> GeneratorConfig {
    let (parsed, ignored) = GeneratorConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DESCRIPTOR: &str = r#"
content = ["./templates/**/*.html", "./theme/**/*.html"]

plugins = ["typography"]

[theme.extend.font_family]
hero = ["MADEDillan", "serif"]
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<GeneratorConfig, _> = toml::from_str("[theme\ncontent = []");
        assert!(result.is_err());
    }

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.content.is_empty());
        assert!(config.plugins.is_empty());
        assert!(config.theme.extend.is_empty());
    }

    #[test]
    fn test_parse_descriptor() {
        let config = test_parse_config(DESCRIPTOR);

        assert_eq!(
            config.content_globs(),
            ["./templates/**/*.html", "./theme/**/*.html"]
        );
        assert_eq!(
            config.theme_extensions().font_family["hero"],
            vec!["MADEDillan", "serif"]
        );
        assert_eq!(config.plugins().len(), 1);
        assert_eq!(config.plugins()[0].as_str(), "typography");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_trip() {
        let config = test_parse_config(DESCRIPTOR);
        let emitted = config.to_toml_string().unwrap();
        let reparsed = test_parse_config(&emitted);
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "content = []\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = GeneratorConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert!(config.content.is_empty());

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = GeneratorConfig::parse_with_ignored(DESCRIPTOR).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_root_paths() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.get_root(), Path::new(""));

        config.set_root(Path::new("/site"));
        assert_eq!(config.root_join("templates"), PathBuf::from("/site/templates"));
        assert_eq!(
            config.root_relative("/site/templates/index.html"),
            PathBuf::from("templates/index.html")
        );
    }

    #[test]
    fn test_load_from() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("weft.toml");
        std::fs::write(&path, DESCRIPTOR).unwrap();

        let config = GeneratorConfig::load_from(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.get_root(), temp.path());
        assert_eq!(config.content_globs().len(), 2);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("weft.toml");
        std::fs::write(&path, "content = [unterminated").unwrap();

        assert!(GeneratorConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_load_from_invalid_glob() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("weft.toml");
        std::fs::write(&path, "content = [\"./templates/[\"]").unwrap();

        // Parses, but validation rejects the uncompilable pattern
        assert!(GeneratorConfig::load_from(&path).is_err());
    }
}
