//! Shared test utilities for loupe integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

// The assertion macros land at the crate root via #[macro_export]; re-export
// them so `use common::*;` brings them into scope as well.
pub use crate::{assert_level, assert_message};

/// Install a test-writer tracing subscriber once per harness binary, so
/// intake diagnostics show up under `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
