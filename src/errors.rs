//! Crate-wide error hierarchy for patch-context-engine.
//!
//! Goals:
//! - Single root `Error` for all public functions.
//! - Failure scope matches recovery scope: a parse failure skips one file,
//!   a mapping failure skips one comment; nothing here is run-fatal.
//! - No dynamic dispatch, ergonomic `?` via `From` impls.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type PatchResult<T> = Result<T, Error>;

/// Root error type for the patch-context-engine crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Unified diff segmentation failure.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Line mapping / comment attachment failure.
    #[error(transparent)]
    Map(#[from] MapError),

    /// Configuration problems (bad globs, malformed rules file, etc.).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input validation errors when nothing more specific fits.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Unified diff segmentation errors.
///
/// A malformed hunk header is *not* represented here: it aborts only the
/// hunk it opened and scanning resumes, so the segmenter surfaces it as a
/// warning rather than an error value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Non-empty patch text produced zero hunks. Distinct from the empty
    /// input case so callers can skip-and-log instead of silently no-op.
    #[error("no hunks could be parsed from non-empty patch text")]
    UnparseablePatch,
}

/// Line mapping and comment attachment errors.
///
/// These are per-comment failures: the caller drops or logs the single
/// comment and continues with the rest of the file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// Relative position is zero/negative or past the end of the hunk body.
    #[error("relative position {position} is out of bounds for a hunk with {body_len} body lines")]
    OutOfBounds { position: i64, body_len: usize },

    /// The targeted hunk line is a deletion. Deleted lines do not exist in
    /// the new file and cannot carry a comment.
    #[error("relative position {position} targets a deleted line")]
    DeletedLine { position: i64 },

    /// Attachment was requested against an empty hunk list. Distinct from
    /// "line not contained in any hunk", which is recovered by remapping.
    #[error("no hunks available for attachment")]
    NoHunks,
}

/// Configuration and rules-file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a rules file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error in a rules file.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An exclude pattern failed to compile as a glob.
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
