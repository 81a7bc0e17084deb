//! Proc macros for weft-config.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a TOML template fragment.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "theme.extend")]
//! /// Additive theme overrides.
//! pub struct ThemeExtendConfig {
//!     /// Font family tokens.
//!     #[config(hidden)]
//!     pub font_family: IndexMap<String, Vec<String>>,
//! }
//!
//! // Generates:
//! // - ThemeExtendConfig::FIELDS.font_family -> FieldPath("theme.extend.font_family")
//! // - ThemeExtendConfig::template() -> TOML string with comments
//! // - ThemeExtendConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path ("" for top-level)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Hide from template output, keep in FIELDS
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(sub)]` - Nested section, rendered as a pointer comment
//! - `#[config(inline_doc)]` - Render single-line doc as inline comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `ThemeSectionConfig` → `theme`
//! - `ContentConfig` → `content`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
