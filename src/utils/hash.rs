//! Content hashing using FxHash.
//!
//! Uses `rustc_hash::FxHasher` for fast, deterministic hashing of
//! descriptor content. Used by the config handle to skip reloads when
//! `weft.toml` has not actually changed.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_deterministic() {
        assert_eq!(compute("content = []"), compute("content = []"));
    }

    #[test]
    fn test_compute_differs_on_change() {
        assert_ne!(compute("plugins = []"), compute("plugins = [\"typography\"]"));
    }
}
