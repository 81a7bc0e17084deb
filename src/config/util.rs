//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the descriptor by searching upward from the current directory
///
/// Returns the absolute path to the descriptor file if found
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Find the descriptor by walking up parent directories from `start`
///
/// # Example
/// ```text
/// /home/user/site/templates/posts/  ← start
/// /home/user/site/weft.toml         ← found!
/// ```
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are used as-is
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_from_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("templates/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("weft.toml"), "content = []\n").unwrap();

        let found = find_config_from(&nested, Path::new("weft.toml")).unwrap();
        assert_eq!(found, temp.path().join("weft.toml"));
    }

    #[test]
    fn test_find_config_from_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_from(temp.path(), Path::new("no-such-file.toml")).is_none());
    }

    #[test]
    fn test_find_config_absolute_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("weft.toml");
        fs::write(&path, "content = []\n").unwrap();

        let found = find_config_from(Path::new("/"), &path).unwrap();
        assert_eq!(found, path);
    }
}
