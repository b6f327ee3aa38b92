//! Line classifier — decides what shape a single log line has.
//!
//! One decode attempt per line, no recovery: a line either decodes to a JSON
//! object, decodes to some other JSON value, or does not decode at all. The
//! normalizer branches on exactly this three-way split.

use serde_json::{Map, Value};

/// Outcome of attempting to decode one line as JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum LineShape {
    /// The line decoded to a JSON object. Key order is preserved.
    Object(Map<String, Value>),
    /// The line decoded, but to something other than an object: a bare
    /// string, number, boolean, null, or array standing alone.
    Scalar(Value),
    /// The line is not valid JSON.
    Undecodable,
}

/// Classify one line of text.
///
/// Callers are expected to have skipped blank lines already; this function
/// happily classifies whatever it is given. No stripping of trailing garbage
/// or bracket-balancing repair is attempted on decode failure.
pub fn classify(line: &str) -> LineShape {
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(map)) => LineShape::Object(map),
        Ok(other) => LineShape::Scalar(other),
        Err(_) => LineShape::Undecodable,
    }
}
