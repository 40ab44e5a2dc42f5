//! Path exclusion filtering
//!
//! Removes per-file statistics whose path matches any configured glob before
//! aggregation. Patterns use globset semantics, so `**` crosses directory
//! separators. A match is an auditable event, never an error, and filtering
//! preserves input order.

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::info;

use crate::error::{Error, Result};
use super::FileChangeStat;

/// Compiled exclusion rule set
#[derive(Debug)]
pub struct PathExclusions {
    set: GlobSet,
}

impl PathExclusions {
    /// Compile a set of glob patterns; invalid patterns are configuration errors
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                Error::config(format!("invalid exclusion pattern '{pattern}': {e}"))
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| Error::config(format!("failed to compile exclusion patterns: {e}")))?;

        Ok(Self { set })
    }

    /// Whether a path matches any exclusion pattern
    pub fn is_excluded(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    /// Drop excluded stats, logging each match, keeping input order
    pub fn filter(&self, stats: Vec<FileChangeStat>) -> Vec<FileChangeStat> {
        if self.set.is_empty() {
            return stats;
        }

        stats
            .into_iter()
            .filter(|stat| {
                if self.is_excluded(&stat.path) {
                    info!(path = %stat.path, "excluded from size calculation");
                    false
                } else {
                    true
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(path: &str) -> FileChangeStat {
        FileChangeStat {
            path: path.to_string(),
            inserted: 1,
            deleted: 1,
            modified: 1,
        }
    }

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_pattern_set_is_identity() {
        let exclusions = PathExclusions::new(&[]).unwrap();
        let stats = vec![stat("a.rs"), stat("vendor/lib.go")];
        assert_eq!(exclusions.filter(stats.clone()), stats);
    }

    #[test]
    fn test_recursive_wildcard_crosses_directories() {
        let exclusions = PathExclusions::new(&patterns(&["vendor/**"])).unwrap();
        assert!(exclusions.is_excluded("vendor/lib.go"));
        assert!(exclusions.is_excluded("vendor/a/b/c.go"));
        assert!(!exclusions.is_excluded("main.go"));
        assert!(!exclusions.is_excluded("src/vendor.rs"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let exclusions = PathExclusions::new(&patterns(&["*.lock"])).unwrap();
        let stats = vec![stat("z.rs"), stat("Cargo.lock"), stat("a.rs"), stat("m.rs")];
        let kept: Vec<String> = exclusions
            .filter(stats)
            .into_iter()
            .map(|s| s.path)
            .collect();
        assert_eq!(kept, vec!["z.rs", "a.rs", "m.rs"]);
    }

    #[test]
    fn test_filter_composition_equals_union() {
        // Applying {A} then {B} must equal applying {A, B} directly
        let stats = vec![
            stat("vendor/lib.go"),
            stat("docs/guide.md"),
            stat("src/main.rs"),
        ];

        let a = PathExclusions::new(&patterns(&["vendor/**"])).unwrap();
        let b = PathExclusions::new(&patterns(&["docs/**"])).unwrap();
        let sequential = b.filter(a.filter(stats.clone()));

        let union = PathExclusions::new(&patterns(&["vendor/**", "docs/**"])).unwrap();
        assert_eq!(sequential, union.filter(stats));
    }

    #[test]
    fn test_invalid_pattern_is_configuration_error() {
        let err = PathExclusions::new(&patterns(&["vendor/[**"])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
