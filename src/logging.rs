//! Tracing setup for the binary.
//!
//! The verbosity defaults to `info` and can be changed with `RUST_LOG`. The
//! interactive mode owns the terminal, so it only logs when a log directory is
//! given, in which case events go to `sokoban.log` inside it.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub const LOG_FILE_NAME: &str = "sokoban.log";

pub enum LogTarget<'a> {
    Stderr,
    Directory(&'a Path),
    Disabled,
}

pub fn init(target: LogTarget) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::Directory(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create log directory {}", dir.display()))?;
            let path = dir.join(LOG_FILE_NAME);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
    }
    Ok(())
}
