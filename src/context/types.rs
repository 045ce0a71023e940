//! Core types used by the context layer.

use serde::{Deserialize, Serialize};

/// Inclusive range of 0-based line indices covering a detected block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

/// Tunables for context extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    /// Window size used when block detection fails or the hunk header
    /// cannot be decoded.
    pub fallback_lines: usize,
}

impl Default for ContextOptions {
    fn default() -> Self {
        ContextOptions { fallback_lines: 20 }
    }
}
