//! Tracing setup.
//!
//! Logs go to a file because stdout belongs to the board. Level filtering
//! follows `RUST_LOG`, defaulting to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber when a log file is configured.
///
/// Returns whether logging was enabled.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow!("log: create {} failed: {}", parent.display(), e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("log: open {} failed: {}", path.display(), e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("log: install subscriber failed: {}", e))?;

    Ok(true)
}
