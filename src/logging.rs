// src/logging.rs
//! Log setup. The terminal belongs to the UI, so records go to a file.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Log file name inside the config directory.
pub const LOG_FILE: &str = "tapedeck.log";

/// Route `log` records to `<dir>/tapedeck.log`, filtered by `RUST_LOG`
/// (default `info`).
pub fn init(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}
