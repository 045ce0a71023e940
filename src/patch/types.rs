//! Data model for one file's segmented patch.
//!
//! These types are the normalized output of segmentation and are consumed
//! by the later stages (line mapping, attachment, context extraction). They
//! are built fresh per (file, patch) pair and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Classification of one hunk body line, decoded once at parse time.
///
/// Decoding the prefix character once removes the class of bugs where call
/// sites re-inspect `line[0]` and disagree about empty lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Unchanged line, present in both file versions (prefix `' '`).
    Context,
    /// Line added in the new file version (prefix `'+'`).
    Added,
    /// Line removed from the old file version (prefix `'-'`).
    Deleted,
}

impl LineKind {
    /// True when a line of this kind occupies a line number in the new file.
    pub fn counts_in_new_file(self) -> bool {
        matches!(self, LineKind::Context | LineKind::Added)
    }
}

/// One body line of a hunk: its classification plus the verbatim text
/// (prefix character included) for round-trip display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunkLine {
    pub kind: LineKind,
    /// The raw patch line exactly as received, prefix included.
    pub raw: String,
}

impl HunkLine {
    /// Classify a raw patch body line by its prefix character.
    ///
    /// Empty lines are context: diff tools emit blank context lines whose
    /// single `' '` prefix is sometimes stripped in transit.
    pub fn classify(raw: &str) -> Self {
        let kind = match raw.as_bytes().first() {
            Some(b'+') => LineKind::Added,
            Some(b'-') => LineKind::Deleted,
            _ => LineKind::Context,
        };
        HunkLine {
            kind,
            raw: raw.to_string(),
        }
    }

    /// Line text without the leading prefix character.
    pub fn content(&self) -> &str {
        match self.raw.as_bytes().first() {
            Some(b' ') | Some(b'+') | Some(b'-') => &self.raw[1..],
            _ => &self.raw,
        }
    }
}

/// One `@@ @@`-delimited block of a per-file patch.
///
/// `lines` holds the body only; the header is kept verbatim in `header` and
/// counts as position 0 of the hunk content, so the 1-based relative
/// position `p` used by the mapper addresses `lines[p - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// The original `@@ -a,b +c,d @@` line, preserved verbatim.
    pub header: String,
    /// Body lines in patch order.
    pub lines: Vec<HunkLine>,
    /// Start line in the old file (the header's `-a` field).
    pub old_start_line: u32,
    /// Old-side length (`b`, defaulting to 1 when omitted).
    pub old_line_count: u32,
    /// Inclusive 1-based start of this hunk's range in the new file.
    pub new_start_line: u32,
    /// Inclusive 1-based end of this hunk's range in the new file.
    ///
    /// Always `new_start_line + new_line_count - 1`. For a pure deletion
    /// hunk (`new_line_count == 0`) this falls below `new_start_line`, so
    /// the hunk can never contain a new-file line.
    pub new_end_line: u32,
    /// Number of lines this hunk spans in the new file (`d`, default 1).
    pub new_line_count: u32,
}

impl Hunk {
    pub(crate) fn open(header_line: &str, h: super::header::HunkHeader) -> Self {
        Hunk {
            header: header_line.to_string(),
            lines: Vec::new(),
            old_start_line: h.old_start,
            old_line_count: h.old_len,
            new_start_line: h.new_start,
            new_end_line: h.new_start.saturating_add(h.new_len).saturating_sub(1),
            new_line_count: h.new_len,
        }
    }

    /// Whether `line` (absolute, 1-based, new file) falls inside this
    /// hunk's new-file range.
    pub fn contains_new_line(&self, line: u32) -> bool {
        self.new_start_line <= line && line <= self.new_end_line
    }

    /// Reconstitute the raw hunk text: the header first, then every body
    /// line verbatim, joined with newlines. Re-segmenting this text yields
    /// the same hunk back.
    pub fn raw_content(&self) -> String {
        let mut out = String::with_capacity(
            self.header.len() + self.lines.iter().map(|l| l.raw.len() + 1).sum::<usize>(),
        );
        out.push_str(&self.header);
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.raw);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_prefix() {
        assert_eq!(HunkLine::classify(" x").kind, LineKind::Context);
        assert_eq!(HunkLine::classify("+x").kind, LineKind::Added);
        assert_eq!(HunkLine::classify("-x").kind, LineKind::Deleted);
        // Blank context line whose prefix was stripped in transit.
        assert_eq!(HunkLine::classify("").kind, LineKind::Context);
    }

    #[test]
    fn content_strips_prefix_only() {
        assert_eq!(HunkLine::classify("+    a = 1").content(), "    a = 1");
        assert_eq!(HunkLine::classify(" ").content(), "");
        assert_eq!(HunkLine::classify("").content(), "");
    }

    #[test]
    fn pure_deletion_hunk_contains_nothing() {
        let h = Hunk {
            header: "@@ -3,2 +3,0 @@".into(),
            lines: Vec::new(),
            old_start_line: 3,
            old_line_count: 2,
            new_start_line: 3,
            new_end_line: 2,
            new_line_count: 0,
        };
        assert!(!h.contains_new_line(2));
        assert!(!h.contains_new_line(3));
    }
}
