//! Per-file unified diff segmentation.
//!
//! Splits one file's patch text into an ordered sequence of hunks:
//! - Works on hunks-only input; anything before the first `@@` header is
//!   discarded (file-level `diff --git`/`---`/`+++` preambles are the
//!   caller's concern and never reach this module).
//! - Ignores `\ No newline at end of file` marker lines.
//! - A header whose counters cannot be parsed aborts only the hunk it
//!   opened; scanning resumes at the next header.

pub mod header;
pub mod types;

use tracing::{debug, warn};

use crate::errors::ParseError;

pub use header::{HunkHeader, decode_hunk_header};
pub use types::{Hunk, HunkLine, LineKind};

/// Split per-file patch text into ordered hunks.
///
/// Empty input yields an empty list: "no changes" is not an error.
/// Non-empty input that yields zero hunks is `ParseError::UnparseablePatch`
/// so callers can skip-and-log the file instead of silently doing nothing.
pub fn segment_patch(patch_text: &str) -> Result<Vec<Hunk>, ParseError> {
    if patch_text.is_empty() {
        return Ok(Vec::new());
    }

    let mut hunks: Vec<Hunk> = Vec::new();
    let mut current: Option<Hunk> = None;

    for line in patch_text.lines() {
        match header::scan_header_line(line) {
            header::HeaderScan::Header(h) => {
                if let Some(done) = current.take() {
                    hunks.push(done);
                }
                current = Some(Hunk::open(line, h));
            }
            header::HeaderScan::Malformed => {
                warn!("could not parse hunk header counters: {}", line);
                current = None;
            }
            header::HeaderScan::NotAHeader => {
                if line.starts_with('\\') {
                    // "\ No newline at end of file" is not hunk content.
                    continue;
                }
                if let Some(h) = current.as_mut() {
                    h.lines.push(HunkLine::classify(line));
                }
            }
        }
    }

    if let Some(done) = current.take() {
        hunks.push(done);
    }

    if hunks.is_empty() {
        warn!("could not parse any hunks from the provided patch text");
        return Err(ParseError::UnparseablePatch);
    }

    debug!("segmented patch into {} hunks", hunks.len());
    Ok(hunks)
}
