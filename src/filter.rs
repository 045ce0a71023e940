//! Glob-based exclusion of changed-file paths.

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use crate::errors::ConfigError;

/// Compiled set of exclusion patterns applied to repo-relative paths.
///
/// Patterns are gitignore-style globs (`*.md`, `docs/*`, `**/generated/*`).
/// An empty pattern list excludes nothing.
#[derive(Debug, Clone)]
pub struct FileFilter {
    set: GlobSet,
    patterns: Vec<String>,
}

impl FileFilter {
    /// Compile exclusion patterns. Fails on the first invalid glob so a
    /// typo in the rules file is reported instead of silently matching
    /// nothing.
    pub fn new<I>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let patterns: Vec<String> = patterns.into_iter().collect();
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: e.glob().unwrap_or_default().to_string(),
            source: e,
        })?;
        Ok(FileFilter { set, patterns })
    }

    /// Whether `path` matches any exclusion pattern.
    pub fn is_excluded(&self, path: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let excluded = self.set.is_match(path);
        if excluded {
            debug!("excluding file {} by pattern", path);
        }
        excluded
    }
}
