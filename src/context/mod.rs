//! Context window extraction around a hunk.
//!
//! Builds the code context a review prompt ships alongside a hunk:
//! - the file-leading imports block, displayed separately;
//! - the logical block enclosing the hunk's position in the base file,
//!   located by an indentation heuristic;
//! - a fixed-size line window with `...` markers when the header cannot be
//!   decoded or block detection comes up empty.
//!
//! Context is drawn from the pre-change file (the caller passes post-change
//! text for newly added files), so the hunk header's **old** start line is
//! the anchor.

pub mod block;
pub mod imports;
pub mod types;

use tracing::debug;

use crate::patch::decode_hunk_header;

pub use block::{BlockBoundaryFinder, IndentationBlockFinder};
pub use imports::{collect_imports_block, is_import_like};
pub use types::{BlockRange, ContextOptions};

/// Separator between the imports block and the body block.
const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Extract review context around `hunk_header` using the stock
/// indentation-based block finder.
pub fn extract_context_around_hunk(
    full_text: &str,
    hunk_header: &str,
    opts: &ContextOptions,
) -> String {
    extract_context_with(&IndentationBlockFinder, full_text, hunk_header, opts)
}

/// Extract review context with a caller-supplied block finder.
///
/// Empty or whitespace-only `full_text` yields an empty context: the file
/// is new, deleted, or unavailable, and that is not an error here.
pub fn extract_context_with<F: BlockBoundaryFinder>(
    finder: &F,
    full_text: &str,
    hunk_header: &str,
    opts: &ContextOptions,
) -> String {
    if full_text.trim().is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = full_text.lines().collect();
    let imports = collect_imports_block(&lines);

    let Some(header) = decode_hunk_header(hunk_header) else {
        debug!(
            "could not decode hunk header {:?} for context; using edge window",
            hunk_header
        );
        return join_sections(&imports, &edge_window(&lines, opts.fallback_lines));
    };

    let anchor = (header.old_start as usize)
        .saturating_sub(1)
        .min(lines.len() - 1);

    let block_text = finder
        .find_block(&lines, anchor)
        .map(|b| {
            let end = b.end.min(lines.len() - 1);
            if b.start <= end {
                lines[b.start..=end].join("\n")
            } else {
                String::new()
            }
        })
        .unwrap_or_default();

    let body = if block_text.is_empty() {
        debug!(
            "block detection came up empty near line {}; using fixed window",
            anchor + 1
        );
        anchored_window(&lines, anchor, opts.fallback_lines)
    } else {
        block_text
    };

    join_sections(&imports, &body)
}

/// First and last `fallback` lines with a single `...` between, used when
/// there is no usable anchor. Small files are passed through whole.
fn edge_window(lines: &[&str], fallback: usize) -> String {
    if lines.len() <= fallback * 2 {
        return lines.join("\n");
    }
    let mut out: Vec<&str> = Vec::with_capacity(fallback * 2 + 1);
    out.extend(&lines[..fallback]);
    out.push("...");
    out.extend(&lines[lines.len() - fallback..]);
    out.join("\n")
}

/// Fixed window centered on `anchor`, clamped to the file, with a `...`
/// marker on each truncated side.
fn anchored_window(lines: &[&str], anchor: usize, fallback: usize) -> String {
    let half = fallback / 2;
    let start = anchor.saturating_sub(half);
    let end = (anchor + half + 1).min(lines.len());
    let mut out = lines[start..end].join("\n");
    if start > 0 {
        out = format!("...\n{out}");
    }
    if end < lines.len() {
        out = format!("{out}\n...");
    }
    out
}

fn join_sections(imports: &str, body: &str) -> String {
    let mut out = String::with_capacity(imports.len() + SECTION_SEPARATOR.len() + body.len());
    out.push_str(imports);
    if !imports.is_empty() && !body.is_empty() {
        out.push_str(SECTION_SEPARATOR);
    }
    out.push_str(body);
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "import os\nimport sys\n\ndef alpha():\n    a = 1\n    return a\n\ndef beta():\n    b = 2\n    if b:\n        b += 1\n    return b";

    #[test]
    fn whitespace_only_file_yields_empty_context() {
        let opts = ContextOptions::default();
        assert_eq!(extract_context_around_hunk("", "@@ -1,1 +1,1 @@", &opts), "");
        assert_eq!(extract_context_around_hunk("  \n \t ", "not a header", &opts), "");
    }

    #[test]
    fn enclosing_block_with_imports() {
        let opts = ContextOptions::default();
        let ctx = extract_context_around_hunk(SAMPLE, "@@ -5,2 +5,2 @@", &opts);
        assert_eq!(
            ctx,
            "import os\nimport sys\n\n---\n\ndef alpha():\n    a = 1\n    return a"
        );
    }

    #[test]
    fn undecodable_header_falls_back_to_edge_window() {
        let opts = ContextOptions { fallback_lines: 2 };
        let ctx = extract_context_around_hunk(SAMPLE, "@@ broken @@", &opts);
        assert_eq!(
            ctx,
            "import os\nimport sys\n\n---\n\nimport os\nimport sys\n...\n        b += 1\n    return b"
        );
    }

    #[test]
    fn edge_window_passes_small_files_through() {
        let opts = ContextOptions { fallback_lines: 20 };
        let ctx = extract_context_around_hunk("a = 1\nb = 2", "garbage", &opts);
        assert_eq!(ctx, "a = 1\nb = 2");
    }

    #[test]
    fn empty_block_falls_back_to_anchored_window() {
        // The first line is blank, so the detected block is a lone empty
        // line and the fixed window takes over.
        let opts = ContextOptions::default();
        let ctx = extract_context_around_hunk("\nfoo\nbar", "@@ -1 +1 @@", &opts);
        assert_eq!(ctx, "foo\nbar");
    }

    #[test]
    fn anchored_window_marks_truncated_sides() {
        struct NoBlock;
        impl BlockBoundaryFinder for NoBlock {
            fn find_block(&self, _lines: &[&str], _target: usize) -> Option<BlockRange> {
                None
            }
        }

        let file: String = (1..=30).map(|i| format!("l{i}\n")).collect();
        let opts = ContextOptions { fallback_lines: 4 };
        let ctx = extract_context_with(&NoBlock, &file, "@@ -15,2 +15,2 @@", &opts);
        assert_eq!(ctx, "...\nl13\nl14\nl15\nl16\nl17\n...");
    }

    #[test]
    fn out_of_range_old_start_is_clamped() {
        let opts = ContextOptions::default();
        let ctx = extract_context_around_hunk("x = 1\ny = 2", "@@ -999,1 +999,1 @@", &opts);
        assert!(!ctx.is_empty());
    }
}
