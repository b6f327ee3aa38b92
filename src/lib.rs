//! loupe — load, normalise, and inspect line-delimited log files.
//!
//! This crate is the application-side library around the pure engine in
//! `loupe-core`: it reads files, feeds their text through the batch parser,
//! and keeps the per-file bookkeeping a viewer needs (duplicate screening,
//! removal cascades, substring filtering).
//!
//! # Architecture
//!
//! ```text
//! Intake ──► loupe-core (classify ▸ normalize ▸ parse) ──► Session ──► UI
//! ```
//!
//! Intake is the only async boundary — one whole-file read per file, no
//! partial results. Everything downstream is synchronous over immutable
//! values.

pub mod config;
pub mod intake;
pub mod session;

pub use loupe_core::{LogRecord, ERROR_LEVEL, RAW_LEVEL};
pub use session::{FileRecord, Session};
