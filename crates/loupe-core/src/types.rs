//! Core types for loupe-core.
//!
//! This module defines the unit of output shared across all layers: the
//! normalised [`LogRecord`] and the synthetic level values the normalizer
//! injects for lines that did not decode as a JSON object.

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Synthetic level for lines that are not valid JSON at all.
///
/// Distinct from any level a real log line could carry through the key
/// heuristics, which only ever copy field *values*.
pub const ERROR_LEVEL: &str = "error";

/// Synthetic level for lines that are valid JSON but not an object
/// (a bare string, number, boolean, null, or array standing alone).
pub const RAW_LEVEL: &str = "raw";

/// A normalised log record produced by the batch parser.
///
/// Every record traces back to exactly one input line from exactly one input
/// file: `original_line` plus `source_file` reconstruct provenance, and both
/// survive every parse outcome. Records are independent immutable values —
/// nothing is shared between lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Opaque identity for selection and list keys. Freshly generated at
    /// normalization time; not stable across parses of the same file.
    pub id: Uuid,
    /// Verbatim text of the first timestamp-bearing field, if any was found.
    /// The value is never parsed or validated.
    pub timestamp: Option<String>,
    /// Detected severity/category label, copied verbatim — or one of the
    /// synthetic values [`ERROR_LEVEL`] / [`RAW_LEVEL`].
    pub level: Option<String>,
    /// Best-guess human-readable payload. Always present.
    pub message: String,
    /// The decoded JSON object, key order untouched. On the non-object paths
    /// this is a synthetic wrapper object so the payload is never absent.
    pub raw: Map<String, Value>,
    /// The exact input line, byte-for-byte, minus the newline it was split on.
    pub original_line: String,
    /// Name of the file the line came from. Grouping, filtering, and removal
    /// cascades key off this.
    pub source_file: String,
}

impl LogRecord {
    /// Render the decoded payload as indented JSON for a detail view.
    pub fn pretty_raw(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.original_line.clone())
    }
}
