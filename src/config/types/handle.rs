//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic descriptor replacement.
//! Each build invocation reads exactly one frozen descriptor; watch-mode
//! consumers call [`reload_config`] between invocations to pick up edits
//! to `weft.toml`.

use crate::config::GeneratorConfig;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global descriptor storage.
pub static CONFIG: LazyLock<ArcSwap<GeneratorConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(GeneratorConfig::default()));

/// Global hash of the current descriptor file content.
static CONFIG_HASH: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

#[inline]
pub fn cfg() -> Arc<GeneratorConfig> {
    CONFIG.load_full()
}

/// Reload the descriptor from disk if its content changed.
///
/// Returns `Ok(true)` if the descriptor was updated, `Ok(false)` if unchanged.
pub fn reload_config() -> Result<bool> {
    use std::fs;

    let c = cfg();

    let content = fs::read_to_string(&c.config_path)?;
    let new_hash = crate::utils::hash::compute(content.as_bytes());

    let old_hash = CONFIG_HASH.load(std::sync::atomic::Ordering::Relaxed);
    if new_hash == old_hash {
        return Ok(false);
    }

    let new_config = GeneratorConfig::load_from(&c.config_path)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, std::sync::atomic::Ordering::Relaxed);

    Ok(true)
}

#[inline]
pub fn init_config(config: GeneratorConfig) -> Arc<GeneratorConfig> {
    use std::fs;

    if config.config_path.exists()
        && let Ok(content) = fs::read_to_string(&config.config_path)
    {
        let hash = crate::utils::hash::compute(content.as_bytes());
        CONFIG_HASH.store(hash, std::sync::atomic::Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Single test: the handle is process-global state.
    #[test]
    fn test_init_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("weft.toml");
        fs::write(&path, "content = [\"./templates/**/*.html\"]\n").unwrap();

        let config = GeneratorConfig::load_from(&path).unwrap();
        init_config(config);
        assert_eq!(cfg().content.globs(), ["./templates/**/*.html"]);

        // Unchanged file: no reload
        assert!(!reload_config().unwrap());

        // Edited file: reloaded atomically
        fs::write(
            &path,
            "content = [\"./templates/**/*.html\"]\nplugins = [\"typography\"]\n",
        )
        .unwrap();
        assert!(reload_config().unwrap());
        assert_eq!(cfg().plugins.len(), 1);
    }
}
