//! Hunk header decoding.
//!
//! The only supported form is the standard unified header
//! `@@ -<oldStart>[,<oldLen>] +<newStart>[,<newLen>] @@`, matched literally
//! including the optional-length shorthand.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HUNK_HEADER_RE: Regex =
        Regex::new(r"^@@ -(\d+),?(\d*) \+(\d+),?(\d*) @@").expect("hunk header regex");
}

/// Decoded numeric fields of one `@@ -a,b +c,d @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: u32,
    pub old_len: u32,
    pub new_start: u32,
    pub new_len: u32,
}

/// Outcome of scanning one patch line for a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderScan {
    /// The line does not have the header shape at all; body lines
    /// legitimately look like anything, so this is never an error.
    NotAHeader,
    /// The line has the header shape but its counters do not fit the
    /// numeric domain. Aborts the hunk it would have opened.
    Malformed,
    Header(HunkHeader),
}

/// Scan one line, distinguishing "not a header" from "header with
/// unusable counters".
pub(crate) fn scan_header_line(line: &str) -> HeaderScan {
    let Some(caps) = HUNK_HEADER_RE.captures(line) else {
        return HeaderScan::NotAHeader;
    };

    let old_start = caps[1].parse::<u32>();
    let old_len = parse_len(&caps[2]);
    let new_start = caps[3].parse::<u32>();
    let new_len = parse_len(&caps[4]);

    match (old_start, old_len, new_start, new_len) {
        (Ok(os), Ok(ol), Ok(ns), Ok(nl)) => HeaderScan::Header(HunkHeader {
            old_start: os,
            old_len: ol,
            new_start: ns,
            new_len: nl,
        }),
        _ => HeaderScan::Malformed,
    }
}

/// Decode one line as a hunk header.
///
/// Returns `None` when the line is not a usable header (wrong shape or
/// counters out of range). Callers must treat that as "not a header line",
/// never as a fatal condition.
pub fn decode_hunk_header(line: &str) -> Option<HunkHeader> {
    match scan_header_line(line) {
        HeaderScan::Header(h) => Some(h),
        _ => None,
    }
}

/// Optional length field: an omitted length means 1.
fn parse_len(field: &str) -> Result<u32, std::num::ParseIntError> {
    if field.is_empty() {
        Ok(1)
    } else {
        field.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_form() {
        let h = decode_hunk_header("@@ -5,5 +5,6 @@").unwrap();
        assert_eq!(
            h,
            HunkHeader {
                old_start: 5,
                old_len: 5,
                new_start: 5,
                new_len: 6
            }
        );
    }

    #[test]
    fn omitted_lengths_default_to_one() {
        let h = decode_hunk_header("@@ -0,0 +1 @@").unwrap();
        assert_eq!(h.old_start, 0);
        assert_eq!(h.old_len, 0);
        assert_eq!(h.new_start, 1);
        assert_eq!(h.new_len, 1);

        let h = decode_hunk_header("@@ -3 +3 @@").unwrap();
        assert_eq!(h.old_len, 1);
        assert_eq!(h.new_len, 1);
    }

    #[test]
    fn trailing_section_text_is_fine() {
        let h = decode_hunk_header("@@ -10,4 +11,5 @@ fn process_list(items)").unwrap();
        assert_eq!(h.new_start, 11);
        assert_eq!(h.new_len, 5);
    }

    #[test]
    fn non_headers_do_not_match() {
        assert_eq!(decode_hunk_header(""), None);
        assert_eq!(decode_hunk_header(" @@ -1 +1 @@"), None);
        assert_eq!(decode_hunk_header("@@ -a,b +c,d @@"), None);
        assert_eq!(decode_hunk_header("+@@ -1 +1 @@"), None);
        assert_eq!(decode_hunk_header("@@ 1,2 +3,4 @@"), None);
    }

    #[test]
    fn counter_overflow_is_malformed_not_a_match() {
        // Shape matches, counters exceed u32: abort the hunk, not the file.
        let line = "@@ -99999999999999999999,1 +1,1 @@";
        assert_eq!(scan_header_line(line), HeaderScan::Malformed);
        assert_eq!(decode_hunk_header(line), None);
    }
}
