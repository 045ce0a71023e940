//! Repo-side review rules.
//!
//! Mirrors the rules file a repository keeps next to its CI config:
//! exclusion globs, custom review instructions, context tunables, optional
//! issue-tracker keys. A missing or broken rules file falls back to
//! defaults with a warning; bad configuration must never stop a review run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::ContextOptions;
use crate::errors::ConfigError;
use crate::filter::FileFilter;

/// Instructions applied when the rules file has none.
pub const DEFAULT_INSTRUCTIONS: &str =
    "Focus on bugs, security, and performance. Do not suggest code comments.";

/// Per-repository review rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewRulesConfig {
    /// Glob patterns for files to skip entirely.
    pub exclude: Vec<String>,
    /// Free-form instructions the caller appends to its review prompt.
    pub custom_instructions: String,
    /// Context extraction tunables.
    pub context: ContextOptions,
    /// Optional issue-tracker integration.
    pub issue_tracker: Option<IssueTrackerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueTrackerConfig {
    /// Project keys whose `KEY-123` references are collected from PR text.
    pub project_keys: Vec<String>,
}

impl Default for ReviewRulesConfig {
    fn default() -> Self {
        ReviewRulesConfig {
            exclude: Vec::new(),
            custom_instructions: DEFAULT_INSTRUCTIONS.to_string(),
            context: ContextOptions::default(),
            issue_tracker: None,
        }
    }
}

impl ReviewRulesConfig {
    /// Parse rules from YAML text. Empty text is the default rules.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load rules from `path`, falling back to defaults when the file is
    /// missing, unreadable, or unparsable.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!(
                    "rules file {} not readable ({}); using defaults",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };
        match Self::from_yaml_str(&text) {
            Ok(cfg) => {
                debug!("loaded review rules from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!(
                    "invalid rules file {} ({}); using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Compile the exclusion globs into a `FileFilter`.
    pub fn file_filter(&self) -> Result<FileFilter, ConfigError> {
        FileFilter::new(self.exclude.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RULES_YAML: &str = "exclude:\n  - \"*.log\"\n  - \"dist/*\"\ncustom_instructions: |\n  Line 1 of instructions.\n  Line 2, check for XYZ.\nissue_tracker:\n  project_keys: [\"TEST\"]\n";

    #[test]
    fn parses_a_full_rules_file() {
        let cfg = ReviewRulesConfig::from_yaml_str(RULES_YAML).unwrap();
        assert_eq!(cfg.exclude, vec!["*.log", "dist/*"]);
        assert!(cfg.custom_instructions.starts_with("Line 1"));
        assert_eq!(cfg.context.fallback_lines, 20);
        assert_eq!(
            cfg.issue_tracker.unwrap().project_keys,
            vec!["TEST".to_string()]
        );
    }

    #[test]
    fn empty_text_is_default_rules() {
        let cfg = ReviewRulesConfig::from_yaml_str("   \n").unwrap();
        assert!(cfg.exclude.is_empty());
        assert_eq!(cfg.custom_instructions, DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let cfg = ReviewRulesConfig::from_yaml_str("context:\n  fallback_lines: 8\n").unwrap();
        assert_eq!(cfg.context.fallback_lines, 8);
        assert_eq!(cfg.custom_instructions, DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg = ReviewRulesConfig::load_or_default(Path::new("no/such/rules.yml"));
        assert_eq!(cfg.custom_instructions, DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn broken_file_loads_defaults() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"exclude: {not: [valid").unwrap();
        let cfg = ReviewRulesConfig::load_or_default(tmp.path());
        assert!(cfg.exclude.is_empty());
    }

    #[test]
    fn rules_file_round_trips_through_the_filter() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(RULES_YAML.as_bytes()).unwrap();
        let cfg = ReviewRulesConfig::load_or_default(tmp.path());
        let filter = cfg.file_filter().unwrap();
        assert!(filter.is_excluded("app.log"));
        assert!(filter.is_excluded("dist/bundle.js"));
        assert!(!filter.is_excluded("src/lib.rs"));
    }
}
