//! loupe-core — line-oriented log normalization engine.
//!
//! This crate turns whole-file text into structured [`LogRecord`] values, one
//! per non-blank line, with best-effort field extraction and lossless
//! preservation of the original content.
//!
//! # Architecture
//!
//! ```text
//! file text ──► Batch Parser ──► Classifier ──► Normalizer ──► LogRecord
//! ```
//!
//! The engine is pure and synchronous: no filesystem access, no shared
//! state, no failure modes. A line that cannot be decoded still produces a
//! record — it is tagged with a synthetic level and carries the line verbatim.

pub mod classify;
pub mod normalize;
pub mod parse;
pub mod types;

pub use classify::{classify, LineShape};
pub use normalize::normalize_line;
pub use parse::parse;
pub use types::{LogRecord, ERROR_LEVEL, RAW_LEVEL};
