//! Generator plugins.
//!
//! Plugin references are opaque to this crate; the consuming generator's
//! plugin loader resolves them at build time. Later plugins may override
//! rules emitted by earlier ones, so declaration order is preserved.
//!
//! # Example
//!
//! ```toml
//! plugins = ["typography"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field path for diagnostics (the descriptor's top-level `plugins` key).
const FIELD: FieldPath = FieldPath::new("plugins");

/// Plugins bundled with the generator. Anything else goes through the
/// consumer's plugin loader, so an unknown name only produces a hint here.
const KNOWN_PLUGINS: &[&str] = &["typography", "forms", "aspect-ratio", "container-queries"];

/// Opaque reference to a generator plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this reference names a plugin bundled with the generator.
    pub fn is_known(&self) -> bool {
        KNOWN_PLUGINS.contains(&self.0.as_str())
    }
}

impl fmt::Display for PluginRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PluginRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Validate the plugin list in declaration order.
///
/// # Checks
/// - every reference is a non-empty string
/// - references outside the bundled set produce a hint (resolution is
///   the plugin loader's concern, not a descriptor error)
pub(crate) fn validate(plugins: &[PluginRef], diag: &mut ConfigDiagnostics) {
    for (index, plugin) in plugins.iter().enumerate() {
        if plugin.as_str().is_empty() {
            diag.error(FIELD, format!("plugin reference at index {index} is empty"));
        } else if !plugin.is_known() {
            diag.hint(
                FIELD,
                format!("`{plugin}` is not a bundled plugin, the plugin loader must resolve it"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_single_plugin() {
        let config = test_parse_config("plugins = [\"typography\"]");
        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].as_str(), "typography");
    }

    #[test]
    fn test_order_preserved() {
        let config = test_parse_config("plugins = [\"typography\", \"forms\"]");
        let names: Vec<&str> = config.plugins.iter().map(PluginRef::as_str).collect();
        assert_eq!(names, ["typography", "forms"]);
    }

    #[test]
    fn test_known_plugins() {
        assert!(PluginRef::from("typography").is_known());
        assert!(!PluginRef::from("third-party-grid").is_known());
    }

    #[test]
    fn test_validate_empty_reference() {
        let plugins = [PluginRef::from("")];
        let mut diag = ConfigDiagnostics::new();
        validate(&plugins, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("index 0"));
    }

    #[test]
    fn test_validate_unknown_is_hint_only() {
        let plugins = [PluginRef::from("third-party-grid")];
        let mut diag = ConfigDiagnostics::new();
        validate(&plugins, &mut diag);
        assert!(diag.is_empty());
    }
}
