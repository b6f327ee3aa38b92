//! Configuration types for loupe.
//!
//! [`Config::load`] reads `~/.config/loupe/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[intake]
max_file_bytes = 67108864
extensions     = ["json", "jsonl", "ndjson", "log", "txt"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/loupe/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub intake: IntakeConfig,
}

/// `[intake]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Hard ceiling on the size of a single file; larger files are refused.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    /// File extensions accepted by batch loading, lowercase without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_max_file_bytes() -> u64 {
    64 * 1024 * 1024
}

fn default_extensions() -> Vec<String> {
    ["json", "jsonl", "ndjson", "log", "txt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            extensions: default_extensions(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/loupe/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("loupe")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
