//! Batch parser — whole-file text in, ordered records out.
//!
//! Splitting is on `'\n'` only. Carriage returns are not treated specially:
//! a line split out of CRLF content keeps its trailing `\r` in
//! `original_line` and in the decode attempt. Blank lines (whitespace-only
//! after trimming) are skipped entirely and produce no record.

use crate::normalize::normalize_line;
use crate::types::LogRecord;

/// Parse the complete text of one file into records, in line order.
///
/// Never fails: a malformed line is contained in its own record rather than
/// aborting the rest of the file. Reading the file's bytes into `content` is
/// the caller's concern, and the place where a real error can occur.
pub fn parse(content: &str, source_file: &str) -> Vec<LogRecord> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| normalize_line(line, source_file))
        .collect()
}
