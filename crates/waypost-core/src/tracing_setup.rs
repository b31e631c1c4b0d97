use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::constants::ENV_LOG_FILE;

pub fn init_tracing() -> Result<()> {
    init_tracing_with_default("info")
}

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Logs go to stderr unless `WAYPOST_LOG_FILE` names a file.
pub fn init_tracing_with_default(default_filter: &str) -> Result<()> {
    match log_file_from_env() {
        Some(path) => init_file_layer(&path, default_filter),
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter(default_filter));

            tracing_subscriber::registry()
                .with(stderr_layer)
                .try_init()
                .context("Tracing subscriber already installed")
        }
    }
}

/// Like [`init_tracing_with_default`] but never writes to the terminal, for
/// full-screen UIs. `WAYPOST_LOG_FILE` overrides `default_path`.
pub fn init_file_tracing(default_path: &Path, default_filter: &str) -> Result<()> {
    let path = log_file_from_env().unwrap_or_else(|| default_path.to_path_buf());
    init_file_layer(&path, default_filter)
}

fn log_file_from_env() -> Option<PathBuf> {
    std::env::var_os(ENV_LOG_FILE)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

fn init_file_layer(path: &Path, default_filter: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(env_filter(default_filter));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("Tracing subscriber already installed")
}
