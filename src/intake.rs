//! File intake — the only async boundary in the pipeline.
//!
//! Each file is read in full (no partial results), lossily decoded as UTF-8,
//! and handed to the batch parser. A file that cannot be read is a real
//! error, surfaced per file; batch loading reports the failure and moves on
//! so one bad file never sinks the rest.

use std::path::{Path, PathBuf};

use loupe_core::LogRecord;
use thiserror::Error;

use crate::config::IntakeConfig;

/// Why a single file could not be loaded.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is {size} bytes, over the {limit} byte ceiling")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// One successfully parsed file, not yet owned by a session.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Display name — the file name portion of the path.
    pub name: String,
    /// Size of the file in bytes as read.
    pub size: u64,
    /// Records in line order.
    pub records: Vec<LogRecord>,
}

/// Read, decode, and parse a single file.
pub async fn load(path: &Path, config: &IntakeConfig) -> Result<ParsedFile, IntakeError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| IntakeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let size = bytes.len() as u64;
    if size > config.max_file_bytes {
        return Err(IntakeError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: config.max_file_bytes,
        });
    }

    let text = String::from_utf8_lossy(&bytes);
    let name = file_name(path);
    let records = loupe_core::parse(&text, &name);
    tracing::debug!(file = %name, records = records.len(), "parsed log file");

    Ok(ParsedFile { name, size, records })
}

/// Load a batch of paths. Files with an unaccepted extension are skipped and
/// per-file failures are logged; neither aborts the rest of the batch.
pub async fn load_all(paths: &[PathBuf], config: &IntakeConfig) -> Vec<ParsedFile> {
    let mut loaded = Vec::new();
    for path in paths {
        if !is_accepted(path, config) {
            tracing::warn!(path = %path.display(), "skipping file with unaccepted extension");
            continue;
        }
        match load(path, config).await {
            Ok(parsed) => loaded.push(parsed),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "failed to load log file"),
        }
    }
    loaded
}

/// Whether a path's extension is in the configured accept list
/// (case-insensitive).
pub fn is_accepted(path: &Path, config: &IntakeConfig) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = ext.to_lowercase();
    config.extensions.iter().any(|accepted| *accepted == ext)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
