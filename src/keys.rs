//! Issue-tracker key extraction.

use std::collections::HashSet;

use regex::RegexBuilder;
use tracing::warn;

/// Find issue keys like `ABC-123` in free text (PR title, description,
/// commit messages) for the given project keys.
///
/// Matching is case-insensitive; results keep first-appearance order with
/// the casing found in the text, deduplicated.
pub fn extract_issue_keys(text: &str, project_keys: &[String]) -> Vec<String> {
    if text.is_empty() || project_keys.is_empty() {
        return Vec::new();
    }

    let alternation = project_keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"\b(?:{alternation})-\d+\b");
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            warn!("could not build issue-key pattern: {}", e);
            return Vec::new();
        }
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for m in re.find_iter(text) {
        if seen.insert(m.as_str()) {
            out.push(m.as_str().to_string());
        }
    }
    out
}
