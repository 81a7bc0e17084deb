//! `[theme]` section configuration.
//!
//! Additive overrides merged into the generator's default theme. Merge
//! semantics belong to the consuming generator; this crate only carries
//! the override tokens.
//!
//! # Example
//!
//! ```toml
//! [theme.extend.font_family]
//! hero = ["MADEDillan", "serif"]
//! ```

use crate::config::ConfigDiagnostics;
use indexmap::IndexMap;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Additive theme token overrides.
    #[config(sub)]
    pub extend: ThemeExtendConfig,
}

impl ThemeSectionConfig {
    /// Validate theme configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.extend.validate(diag);
    }
}

/// Token categories added on top of the base theme.
///
/// Token maps keep insertion order so the descriptor re-emits the way
/// it was written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Config)]
#[serde(default)]
#[config(section = "theme.extend")]
pub struct ThemeExtendConfig {
    /// Font family tokens, each an ordered font fallback stack.
    #[config(hidden)]
    pub font_family: IndexMap<String, Vec<String>>,
}

impl ThemeExtendConfig {
    pub fn is_empty(&self) -> bool {
        self.font_family.is_empty()
    }

    /// Validate theme extensions.
    ///
    /// # Checks
    /// - token names are non-empty
    /// - every font stack has at least one non-empty font name
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (token, stack) in &self.font_family {
            if token.is_empty() {
                diag.error(Self::FIELDS.font_family, "token name is empty");
                continue;
            }
            if stack.is_empty() {
                diag.error(
                    Self::FIELDS.font_family,
                    format!("`{token}` has an empty font stack"),
                );
                continue;
            }
            if stack.iter().any(String::is_empty) {
                diag.error(
                    Self::FIELDS.font_family,
                    format!("`{token}` contains an empty font name"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.extend.is_empty());
    }

    #[test]
    fn test_parse_font_family_token() {
        let config = test_parse_config(
            "[theme.extend.font_family]\nhero = [\"MADEDillan\", \"serif\"]",
        );
        assert_eq!(
            config.theme.extend.font_family["hero"],
            vec!["MADEDillan", "serif"]
        );
    }

    #[test]
    fn test_token_order_preserved() {
        let config = test_parse_config(
            "[theme.extend.font_family]\nhero = [\"MADEDillan\", \"serif\"]\nbody = [\"Inter\", \"sans-serif\"]",
        );
        let tokens: Vec<&str> = config
            .theme
            .extend
            .font_family
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(tokens, ["hero", "body"]);
    }

    #[test]
    fn test_validate_empty_font_stack() {
        let config = test_parse_config("[theme.extend.font_family]\nhero = []");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("empty font stack"));
    }

    #[test]
    fn test_validate_empty_font_name() {
        let config = test_parse_config("[theme.extend.font_family]\nhero = [\"MADEDillan\", \"\"]");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("empty font name"));
    }

    #[test]
    fn test_field_path() {
        assert_eq!(
            ThemeExtendConfig::FIELDS.font_family.as_str(),
            "theme.extend.font_family"
        );
    }
}
