//! Map model-reported hunk positions to commentable new-file lines.
//!
//! Two stages, consumed per AI-reported line by the review caller:
//! 1) `map_relative_line` converts a 1-based position inside one hunk's
//!    content into an absolute line number in the post-change file;
//! 2) `resolve_attachment` decides where the comment lands when that
//!    absolute line falls outside every hunk's changed range.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::MapError;
use crate::patch::{Hunk, LineKind};

/// Where a review comment should attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Absolute 1-based line in the new file to comment on.
    pub line: u32,
    /// True when the target fell outside every hunk and the comment was
    /// relocated to the nearest hunk's boundary. Callers must surface the
    /// relocation to the reader rather than dropping it silently.
    pub remapped: bool,
}

/// Map a 1-based position inside one hunk's content to an absolute line
/// number in the new file. Position 0 is the hunk header and is never a
/// valid target.
///
/// The absolute line is `new_start_line + n - 1` where `n` counts the
/// context and added lines from the top of the hunk body up to and
/// including the target. This positional count is exactly how differencing
/// tools number the new file, so it must not drift.
pub fn map_relative_line(relative_position: i64, hunk: &Hunk) -> Result<u32, MapError> {
    if relative_position <= 0 {
        return Err(MapError::OutOfBounds {
            position: relative_position,
            body_len: hunk.lines.len(),
        });
    }

    let idx = (relative_position - 1) as usize;
    let Some(target) = hunk.lines.get(idx) else {
        warn!(
            "relative position {} is out of bounds for hunk body of {} lines",
            relative_position,
            hunk.lines.len()
        );
        return Err(MapError::OutOfBounds {
            position: relative_position,
            body_len: hunk.lines.len(),
        });
    };

    if target.kind == LineKind::Deleted {
        debug!(
            "relative position {} is a deleted line; not commentable",
            relative_position
        );
        return Err(MapError::DeletedLine {
            position: relative_position,
        });
    }

    let counted = hunk.lines[..=idx]
        .iter()
        .filter(|l| l.kind.counts_in_new_file())
        .count() as u32;

    // The count includes the target line itself.
    Ok(hunk.new_start_line + counted - 1)
}

/// Decide the attachment point for an absolute target line against the
/// file's ordered hunk list.
///
/// Containment wins immediately: hunk ranges never overlap, so the first
/// containing hunk is the only one. Otherwise the comment is relocated to
/// the `new_end_line` of the nearest hunk by one-sided distance to the
/// closer edge. The strict `<` on the running minimum means equidistant
/// hunks tie-break to the one earliest in file order; callers may rely on
/// the determinism, not on which hunk specifically wins.
pub fn resolve_attachment(target_line: u32, hunks: &[Hunk]) -> Result<Attachment, MapError> {
    if hunks.is_empty() {
        return Err(MapError::NoHunks);
    }

    let mut best: Option<(&Hunk, u32)> = None;

    for hunk in hunks {
        if hunk.contains_new_line(target_line) {
            return Ok(Attachment {
                line: target_line,
                remapped: false,
            });
        }

        let distance = if target_line < hunk.new_start_line {
            hunk.new_start_line - target_line
        } else {
            target_line - hunk.new_end_line
        };

        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((hunk, distance)),
        }
    }

    match best {
        Some((closest, distance)) => {
            debug!(
                "target line {} outside all hunks; remapping to line {} (distance {})",
                target_line, closest.new_end_line, distance
            );
            Ok(Attachment {
                line: closest.new_end_line,
                remapped: true,
            })
        }
        // Unreachable with a non-empty hunk list; fail rather than panic.
        None => Err(MapError::NoHunks),
    }
}
