//! Configuration descriptor for the weft utility-class CSS generator.
//!
//! Weft scans markup files for utility class usage and emits a minimal
//! stylesheet. This crate owns the declarative side of that pipeline:
//! the `weft.toml` descriptor with content scan globs, additive theme
//! token overrides, and an ordered plugin list. The descriptor is loaded
//! once per build invocation and never mutated afterwards; watch-mode
//! consumers swap in a freshly loaded descriptor between invocations via
//! the global handle.
//!
//! # Example
//!
//! ```toml
//! content = ["./templates/**/*.html", "./theme/**/*.html"]
//!
//! plugins = ["typography"]
//!
//! [theme.extend.font_family]
//! hero = ["MADEDillan", "serif"]
//! ```
//!
//! ```no_run
//! use std::path::Path;
//! use weft_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load(Path::new("weft.toml")).unwrap();
//! let matcher = config.content.glob_set().unwrap();
//! assert!(matcher.is_match("./templates/posts/hello.html"));
//! ```

pub mod config;
pub mod logger;
pub mod utils;

pub use config::{
    ConfigDiagnostics, ConfigError, ContentConfig, FieldPath, GeneratorConfig, PluginRef,
    ThemeExtendConfig, ThemeSectionConfig, cfg, init_config, reload_config,
};
pub use config::template::{generate_config_template, write_config};
