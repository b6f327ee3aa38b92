//! Domain-specific assertion helpers for loupe harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! point at the offending input line.

use loupe_core::LogRecord;

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert that a record carries a specific level.
///
/// ```rust
/// assert_level!(record, "INFO");
/// ```
#[macro_export]
macro_rules! assert_level {
    ($record:expr, $level:expr) => {{
        let record: &loupe_core::LogRecord = &$record;
        let expected: &str = $level;
        match record.level.as_deref() {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_level! failed:\n  expected: {:?}\n  actual:   {:?}\n  line: {:?}",
                expected, actual, record.original_line
            ),
            None => panic!(
                "assert_level! failed: no level on record.\n  line: {:?}",
                record.original_line
            ),
        }
    }};
}

/// Assert that a record carries a specific message.
#[macro_export]
macro_rules! assert_message {
    ($record:expr, $message:expr) => {{
        let record: &loupe_core::LogRecord = &$record;
        let expected: &str = $message;
        if record.message != expected {
            panic!(
                "assert_message! failed:\n  expected: {:?}\n  actual:   {:?}\n  line: {:?}",
                expected, record.message, record.original_line
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Provenance invariants
// ---------------------------------------------------------------------------

/// Assert the provenance invariant: `original_line` and `source_file`
/// together reconstruct exactly where the record came from.
pub fn assert_provenance(record: &LogRecord, line: &str, source_file: &str) {
    assert_eq!(
        record.original_line, line,
        "record must keep the input line byte-for-byte"
    );
    assert_eq!(
        record.source_file, source_file,
        "record must name its originating file"
    );
}

/// Assert that no timestamp was extracted.
pub fn assert_no_timestamp(record: &LogRecord) {
    assert!(
        record.timestamp.is_none(),
        "expected no timestamp, found {:?} (line {:?})",
        record.timestamp,
        record.original_line
    );
}
