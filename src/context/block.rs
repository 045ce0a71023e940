//! Indentation-based block boundary detection.
//!
//! The stock finder leans on indentation alone: it is language-agnostic and
//! deliberately approximate. Known failure modes: syntax where indentation
//! is not significant, deeply nested one-liners, and tab/space mixing (only
//! leading spaces are counted). Callers that need a grammar-aware finder
//! for a specific language implement `BlockBoundaryFinder` themselves and
//! plug it into `extract_context_with`.

use crate::context::types::BlockRange;

/// Capability interface for locating the logical block enclosing a line.
///
/// `lines` is the full file split on newlines; `target` is a 0-based line
/// index already clamped into range by the caller. `None` means the finder
/// could not make a call and the caller should fall back to a fixed window.
pub trait BlockBoundaryFinder {
    fn find_block(&self, lines: &[&str], target: usize) -> Option<BlockRange>;
}

/// Leading keywords that open a block at indentation level zero. Permissive
/// across languages on purpose, like the import detection heuristics.
const BLOCK_OPENERS: [&str; 7] = [
    "def ",
    "class ",
    "fn ",
    "function ",
    "impl ",
    "trait ",
    "interface ",
];

fn is_block_opener(line: &str) -> bool {
    let stripped = line.trim_start();
    BLOCK_OPENERS.iter().any(|kw| {
        stripped.starts_with(kw)
            || stripped
                .strip_prefix("pub ")
                .is_some_and(|rest| rest.starts_with(kw))
    })
}

/// Number of leading spaces. Tabs are not expanded; a tab-indented line
/// reads as indentation zero, which is one of the documented failure modes.
fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// The stock indentation-based finder.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentationBlockFinder;

impl BlockBoundaryFinder for IndentationBlockFinder {
    /// Scan backward for the nearest line indented strictly less than the
    /// target; that line is the block's declaration when it opens a block,
    /// otherwise the block starts on the line after it. Scan forward until
    /// indentation drops back to at or below the declaration's level,
    /// letting blank and comment lines ride along at the boundary.
    fn find_block(&self, lines: &[&str], target: usize) -> Option<BlockRange> {
        if target >= lines.len() {
            return None;
        }

        let target_indent = indentation(lines[target]);

        // Backward scan for the declaration line.
        let mut start = target;
        let mut found = false;
        for i in (0..=target).rev() {
            let line = lines[i];
            let indent = indentation(line);
            if indent < target_indent || (indent == 0 && is_block_opener(line)) {
                start = if is_block_opener(line) { i } else { i + 1 };
                found = true;
                break;
            }
            // Already at level zero without an opener: the previous
            // top-level line is the best start we can name.
            if indent == 0 && i < target {
                start = i;
                found = true;
                break;
            }
        }
        if !found {
            start = 0;
        }
        let start = start.min(lines.len() - 1);

        // Forward scan for the end of the block.
        let decl_indent = indentation(lines[start]);
        let mut end = target;
        let mut closed = false;
        for (offset, &line) in lines[target + 1..].iter().enumerate() {
            let i = target + 1 + offset;
            let stripped = line.trim();
            if stripped.is_empty() || stripped.starts_with('#') {
                end = i;
                continue;
            }
            let indent = indentation(line);
            if decl_indent == 0 {
                if indent == 0 {
                    end = i - 1;
                    closed = true;
                    break;
                }
            } else if indent <= decl_indent {
                end = i - 1;
                closed = true;
                break;
            }
            end = i;
        }
        if !closed && target + 1 < lines.len() {
            end = lines.len() - 1;
        }

        if start > end {
            // Degenerate layout near end of file: settle for the line itself.
            return Some(BlockRange {
                start: target,
                end: target,
            });
        }

        Some(BlockRange { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "import os\nimport sys\n\ndef alpha():\n    a = 1\n    return a\n\ndef beta():\n    b = 2\n    if b:\n        b += 1\n    return b";

    fn sample_lines() -> Vec<&'static str> {
        SAMPLE.lines().collect()
    }

    #[test]
    fn block_starts_at_its_declaration() {
        let lines = sample_lines();
        // Target "    a = 1" (index 4): the def line above is the start.
        let block = IndentationBlockFinder.find_block(&lines, 4).unwrap();
        assert_eq!(block.start, 3);
        assert!(lines[block.start].starts_with("def alpha"));
        // The body plus the trailing blank line ride along.
        assert_eq!(block.end, 6);
    }

    #[test]
    fn block_runs_to_end_of_file() {
        let lines = sample_lines();
        // Target "    return b" (index 11, last line).
        let block = IndentationBlockFinder.find_block(&lines, 11).unwrap();
        assert_eq!(block.end, lines.len() - 1);
    }

    #[test]
    fn non_opener_boundary_starts_the_block_after_it() {
        let lines = sample_lines();
        // Target "        b += 1" (index 10) sits two levels deep; the
        // nearest less-indented line "    if b:" is not an opener, so the
        // block starts right after it.
        let block = IndentationBlockFinder.find_block(&lines, 10).unwrap();
        assert_eq!(block.start, 10);
    }

    #[test]
    fn blank_line_above_bounds_the_block() {
        // A blank line reads as indentation zero, so it cuts the backward
        // scan short even inside a function body.
        let src = "def gamma():\n    x = 1\n\n    y = 2";
        let lines: Vec<&str> = src.lines().collect();
        let block = IndentationBlockFinder.find_block(&lines, 3).unwrap();
        assert_eq!(block.start, 3);
    }

    #[test]
    fn out_of_range_target_is_none() {
        let lines = sample_lines();
        assert!(IndentationBlockFinder.find_block(&lines, 99).is_none());
        assert!(IndentationBlockFinder.find_block(&[], 0).is_none());
    }

    #[test]
    fn rust_style_openers_are_recognized() {
        let src = "use std::fmt;\n\npub fn render(x: u32) -> String {\n    let y = x + 1;\n    format!(\"{y}\")\n}\nfn other() {}";
        let lines: Vec<&str> = src.lines().collect();
        let block = IndentationBlockFinder.find_block(&lines, 3).unwrap();
        assert_eq!(block.start, 2);
        assert!(lines[block.start].starts_with("pub fn render"));
        // The level-zero closing brace terminates the block scan.
        assert_eq!(block.end, 4);
    }
}
