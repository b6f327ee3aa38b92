//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines.
//! The high-volume corpus is generated at test time for throughput checks.

use std::path::{Path, PathBuf};

/// Valid JSON log lines in various shapes and key spellings.
pub const CORPUS_STRUCTURED: &[&str] = &[
    r#"{"timestamp": "2024-01-20T10:00:00Z", "level": "INFO", "message": "Test log 1"}"#,
    r#"{"timestamp": "2024-01-20T10:00:01Z", "level": "ERROR", "msg": "Test log 2"}"#,
    r#"{"ts":"2024-01-15T10:00:02Z","severity":"WARN","text":"Slow query","duration_ms":4200}"#,
    r#"{"@timestamp":"2024-01-15T10:00:03Z","lvl":"debug","content":"Cache miss","key":"user:42"}"#,
    r#"{"date":"2024-01-15","type":"audit","message":"Token validated","user_id":"usr-999"}"#,
];

/// Lines that are valid JSON but not objects.
pub const CORPUS_SCALARS: &[&str] = &["42", "\"quoted string\"", "true", "null", "[1,2,3]"];

/// A mixed file: structured lines, raw text, and a scalar.
pub const CORPUS_MIXED: &[&str] = &[
    r#"{"level": "INFO", "msg": "Valid JSON"}"#,
    "This is a raw text line",
    r#"{"level": "WARN", "msg": "Another valid JSON"}"#,
    "12345",
];

/// Whole-file content containing nothing but blanks and whitespace.
pub const WHITESPACE_ONLY: &str = "\n   \n\t\n  \t  \n\n";

/// Join a corpus into newline-delimited file content.
pub fn as_content(corpus: &[&str]) -> String {
    corpus.join("\n")
}

/// Generate `n` synthetic JSON log lines for throughput testing.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let level = match i % 10 {
                0 => "ERROR",
                1 | 2 => "WARN",
                _ => "INFO",
            };
            format!(
                r#"{{"ts":"2024-01-15T{:02}:{:02}:{:02}Z","level":"{}","message":"log line {}","seq":{}}}"#,
                i / 3600 % 24,
                i / 60 % 60,
                i % 60,
                level,
                i,
                i,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixture file helpers
// ---------------------------------------------------------------------------

/// Write newline-delimited content under `dir` and return the path.
pub fn write_log_file(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, lines.join("\n")).expect("fixture file must be writable");
    path
}
