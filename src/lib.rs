//! Hunk parsing and line-coordinate mapping for AI review comments.
//!
//! The crate turns one file's raw patch text plus its base-file content
//! into everything a review bot needs to place an inline comment:
//!
//! 1) **Segment** — `patch::segment_patch` splits per-file patch text into
//!    ordered hunks (`@@` headers plus body lines classified once as
//!    context/added/deleted).
//! 2) **Map** — `map::map_relative_line` converts the 1-based hunk-relative
//!    position a model reports into an absolute line in the new file.
//! 3) **Attach** — `map::resolve_attachment` keeps in-hunk targets as-is
//!    and relocates out-of-range targets to the nearest hunk boundary so
//!    slightly mis-aimed comments still land on a commentable line.
//! 4) **Context** — `context::extract_context_around_hunk` assembles the
//!    imports block plus the enclosing indentation block (or a fixed
//!    window) around the hunk's position in the base file.
//!
//! The core is synchronous, CPU-bound string processing over already
//! fetched text: no I/O, no locks, no shared mutable state, so independent
//! (file, patch) pairs can be processed concurrently by the caller.
//! Networking, retries, caching and prompt assembly are caller concerns.
//! Every failure is local and recoverable (a bad patch skips one file, a
//! bad position skips one comment) and never aborts the review run.
//! `tracing` is used for debug logging; no `Box<dyn ...>` trait objects.

pub mod config;
pub mod context;
pub mod errors;
pub mod filter;
pub mod keys;
pub mod map;
pub mod patch;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Final placement of one review comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAnchor {
    /// Absolute 1-based line in the new file to attach the comment to.
    pub line: u32,
    /// True when the comment was relocated to a hunk boundary; callers
    /// surface the original target to the reader when presenting it.
    pub remapped: bool,
    /// The absolute line the comment originally targeted.
    pub original_line: u32,
}

/// Anchor one model-reported review line onto a commentable new-file line.
///
/// This is the per-comment composition the review loop runs: map the
/// hunk-relative position inside the hunk the model was shown, then attach
/// the resulting absolute line against the file's full hunk list. Mapping
/// failures (deleted line, out of bounds) surface per-comment so the caller
/// drops that single comment and keeps the rest of the file.
pub fn anchor_review_line(
    relative_line: i64,
    hunk: &Hunk,
    hunks: &[Hunk],
) -> PatchResult<CommentAnchor> {
    let absolute = map::map_relative_line(relative_line, hunk)?;
    debug!(
        "mapped hunk-relative line {} to absolute line {}",
        relative_line, absolute
    );

    let Attachment { line, remapped } = map::resolve_attachment(absolute, hunks)?;
    if remapped {
        debug!(
            "comment for line {} relocated to nearest hunk boundary at line {}",
            absolute, line
        );
    }

    Ok(CommentAnchor {
        line,
        remapped,
        original_line: absolute,
    })
}

// -----------------------------------------------------------------------------
// Convenience re-exports for downstream users
// -----------------------------------------------------------------------------

pub use config::{DEFAULT_INSTRUCTIONS, IssueTrackerConfig, ReviewRulesConfig};
pub use context::{
    BlockBoundaryFinder, ContextOptions, IndentationBlockFinder, extract_context_around_hunk,
    extract_context_with,
};
pub use errors::{ConfigError, Error, MapError, ParseError, PatchResult};
pub use filter::FileFilter;
pub use keys::extract_issue_keys;
pub use map::{Attachment, map_relative_line, resolve_attachment};
pub use patch::{Hunk, HunkHeader, HunkLine, LineKind, decode_hunk_header, segment_patch};
