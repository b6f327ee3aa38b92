//! Session — file and record bookkeeping for one inspection session.
//!
//! The session is the single source of truth the UI reads from: every loaded
//! file's metadata, every record, and the substring filter over them. All of
//! it is plain single-threaded state — records are immutable once ingested
//! and nothing here needs a lock.

use chrono::{DateTime, Utc};
use loupe_core::LogRecord;
use serde::Serialize;
use uuid::Uuid;

use crate::intake::ParsedFile;

/// Per-file bookkeeping, created when a parsed file is accepted into the
/// session and destroyed when the file is removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub entry_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// In-memory state for one inspection session.
#[derive(Debug, Default)]
pub struct Session {
    files: Vec<FileRecord>,
    records: Vec<LogRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loaded files, in acceptance order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// All records, in ingestion order (line order within each file).
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// A file counts as already loaded if some loaded file has the identical
    /// name and identical byte size.
    pub fn is_loaded(&self, name: &str, size: u64) -> bool {
        self.files.iter().any(|f| f.name == name && f.size == size)
    }

    /// Accept a parsed file into the session. Returns the new file's id, or
    /// `None` if an identical file (same name and size) is already loaded —
    /// in which case the session is left untouched.
    pub fn ingest(&mut self, parsed: ParsedFile) -> Option<Uuid> {
        if self.is_loaded(&parsed.name, parsed.size) {
            tracing::debug!(file = %parsed.name, "duplicate file ignored");
            return None;
        }

        let file = FileRecord {
            id: Uuid::new_v4(),
            name: parsed.name,
            size: parsed.size,
            entry_count: parsed.records.len(),
            loaded_at: Utc::now(),
        };
        let id = file.id;
        self.records.extend(parsed.records);
        self.files.push(file);
        Some(id)
    }

    /// Remove a file and cascade-remove every record that came from it.
    /// Returns false if no file with that id is loaded.
    pub fn remove_file(&mut self, id: Uuid) -> bool {
        let Some(pos) = self.files.iter().position(|f| f.id == id) else {
            return false;
        };
        let removed = self.files.remove(pos);
        self.records.retain(|r| r.source_file != removed.name);
        true
    }

    /// Drop all files and records.
    pub fn clear(&mut self) {
        self.files.clear();
        self.records.clear();
    }

    /// Case-insensitive substring filter over message, level, and source
    /// file name. An empty query returns every record, in ingestion order.
    pub fn filter(&self, query: &str) -> Vec<&LogRecord> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.message.to_lowercase().contains(&query)
                    || r.level
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&query))
                    || r.source_file.to_lowercase().contains(&query)
            })
            .collect()
    }
}
