//! File-backed tracing setup.
//!
//! The terminal is owned by the renderer, so logs never go to stdout or
//! stderr. `RUST_LOG` controls the filter; the default level is `info`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global subscriber that writes to `path`.
///
/// With no path, no subscriber is installed and tracing macros are no-ops.
pub fn init_file_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let log_file =
        File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
