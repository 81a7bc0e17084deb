//! Descriptor file generation.
//!
//! Creates a starter `weft.toml` for new projects.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::GeneratorConfig;

/// Default descriptor filename
pub const CONFIG_FILE: &str = "weft.toml";

/// Generate weft.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Weft configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/weft-css/weft-config\n\n");

    // Top-level keys (content, plugins)
    out.push_str(GeneratorConfig::template());
    out.push('\n');

    // [theme.extend.font_family] section
    out.push('\n');
    out.push_str("# Font family tokens, each an ordered fallback stack.\n");
    out.push_str("[theme.extend.font_family]\n");
    out.push_str("hero = [\"MADEDillan\", \"serif\"]\n");

    out
}

/// Write the starter weft.toml
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("weft.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("content = "));
        assert!(content.contains("[theme.extend.font_family]"));
    }

    #[test]
    fn test_template_parses_to_starter_descriptor() {
        let config = GeneratorConfig::from_str(&generate_config_template()).unwrap();

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
}
