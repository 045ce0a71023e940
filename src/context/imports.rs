//! Leading imports block collection.
//!
//! Review context is a lot more useful when the file's imports travel with
//! the snippet, so the extractor collects the contiguous import section at
//! the top of the file for separate display. Detection is permissive across
//! languages by design.

/// Detect import-like lines across languages (very permissive).
pub fn is_import_like(line: &str) -> bool {
    let stripped = line.trim_start();
    stripped.starts_with("import ")
        || stripped.starts_with("from ")
        || stripped.starts_with("use ")
        || stripped.starts_with("using ")
        || stripped.starts_with("#include")
        || stripped.starts_with("include ")
        || stripped.starts_with("require(")
        || stripped.starts_with("require ")
}

/// Collect the file-leading imports block.
///
/// Walks from the top of the file, keeping import-like lines and riding
/// over blank lines between them; the first non-empty, non-import line
/// after at least one import ends the block. Returns the kept lines joined
/// with newlines, empty when the file has no leading imports.
pub fn collect_imports_block(lines: &[&str]) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for &line in lines {
        let stripped = line.trim();
        if is_import_like(line) {
            kept.push(line);
        } else if !kept.is_empty() && !stripped.is_empty() {
            break;
        }
    }
    kept.join("\n")
}
