//! Logger setup for the binaries.
//!
//! Library crates only use the `log` macros; installing a logger is left to
//! the binaries. `RUST_LOG` overrides the default `info` filter.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

fn builder() -> env_logger::Builder {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
}

/// Log to stderr (headless tools).
pub fn init_stderr() {
    builder().init();
}

/// Append log lines to `path` instead of the terminal.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    builder()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}
