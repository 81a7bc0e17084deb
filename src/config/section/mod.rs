//! Descriptor section definitions.
//!
//! Each module corresponds to a key in `weft.toml`:
//!
//! | Module    | TOML key    | Purpose                            |
//! |-----------|-------------|------------------------------------|
//! | `content` | `content`   | Glob patterns scanned for classes  |
//! | `theme`   | `[theme]`   | Additive theme token overrides     |
//! | `plugins` | `plugins`   | Ordered generator plugins          |

pub mod content;
pub mod plugins;
pub mod theme;

// Re-export section configs
pub use content::ContentConfig;
pub use plugins::PluginRef;
pub use theme::{ThemeExtendConfig, ThemeSectionConfig};
