//! Field normalizer — turns a classified line into a complete [`LogRecord`].
//!
//! Extraction is heuristic and key-name based: keys are matched
//! case-insensitively against a small candidate list, values are copied as
//! text without any semantic interpretation (no date parsing, no severity
//! mapping). Whatever the outcome, the record keeps the original line and
//! the decoded payload in full.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::classify::{classify, LineShape};
use crate::types::{LogRecord, ERROR_LEVEL, RAW_LEVEL};

/// Key names that carry a severity/category label.
const LEVEL_KEYS: &[&str] = &["level", "severity", "type", "lvl"];

/// Key names that carry the human-readable payload.
const MESSAGE_KEYS: &[&str] = &["message", "msg", "text", "content"];

/// Normalize one non-blank line into a record.
pub fn normalize_line(line: &str, source_file: &str) -> LogRecord {
    match classify(line) {
        LineShape::Object(map) => normalize_object(map, line, source_file),
        LineShape::Scalar(value) => scalar_record(value, line, source_file),
        LineShape::Undecodable => undecodable_record(line, source_file),
    }
}

/// Object case: scan the keys in their original declaration order and take
/// the first match for each of timestamp, level, and message.
///
/// Level matching is first-key-wins across *all* candidate names, not
/// priority-ordered: `{"type":"audit","level":"INFO"}` yields `"audit"`.
fn normalize_object(map: Map<String, Value>, line: &str, source_file: &str) -> LogRecord {
    let mut timestamp = None;
    let mut level = None;
    let mut message = None;

    for (key, value) in &map {
        let lower = key.to_lowercase();
        if timestamp.is_none() && is_timestamp_key(&lower) {
            timestamp = Some(stringify(value));
        }
        if level.is_none() && LEVEL_KEYS.contains(&lower.as_str()) {
            level = Some(stringify(value));
        }
        if message.is_none() && MESSAGE_KEYS.contains(&lower.as_str()) {
            message = Some(stringify(value));
        }
    }

    // No message-like key: the whole object, serialized compactly, is the
    // best human-readable payload available.
    let message = match message {
        Some(message) => message,
        None => serde_json::to_string(&map).unwrap_or_else(|_| line.to_string()),
    };

    LogRecord {
        id: Uuid::new_v4(),
        timestamp,
        level,
        message,
        raw: map,
        original_line: line.to_string(),
        source_file: source_file.to_string(),
    }
}

/// Valid JSON that is not an object: a bare scalar or array on a line of its
/// own. Wrapped under a single `value` key so the payload stays inspectable.
fn scalar_record(value: Value, line: &str, source_file: &str) -> LogRecord {
    let message = stringify(&value);
    let mut raw = Map::new();
    raw.insert("value".to_string(), value);

    LogRecord {
        id: Uuid::new_v4(),
        timestamp: None,
        level: Some(RAW_LEVEL.to_string()),
        message,
        raw,
        original_line: line.to_string(),
        source_file: source_file.to_string(),
    }
}

/// Not JSON at all: the whole line becomes the message, and the payload
/// records the failure alongside the line content.
fn undecodable_record(line: &str, source_file: &str) -> LogRecord {
    let mut raw = Map::new();
    raw.insert("error".to_string(), Value::from("Invalid JSON"));
    raw.insert("content".to_string(), Value::from(line));

    LogRecord {
        id: Uuid::new_v4(),
        timestamp: None,
        level: Some(ERROR_LEVEL.to_string()),
        message: line.to_string(),
        raw,
        original_line: line.to_string(),
        source_file: source_file.to_string(),
    }
}

/// A key names a timestamp if its lowercase form contains `time` or `date`,
/// or is exactly `ts`.
fn is_timestamp_key(lower: &str) -> bool {
    lower.contains("time") || lower.contains("date") || lower == "ts"
}

/// Text form of an arbitrary JSON value: strings verbatim, numbers in
/// decimal, booleans as `true`/`false`, null as `null`, and nested
/// structures as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
