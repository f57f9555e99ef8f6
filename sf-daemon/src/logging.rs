//! Logging setup
//!
//! Console output goes to the systemd journal when it is available and to
//! stdout otherwise. The log file, when enabled, always receives a plain-text
//! copy with local timestamps.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use sf_core::constants::{logging, paths};
use tracing::warn;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DaemonConfig;

/// Where log records end up
#[derive(Debug, Default)]
pub struct LogTargets {
    pub journald: bool,
    pub file: Option<PathBuf>,
}

/// Install the global subscriber. Call once, after the timezone is applied.
pub fn init_logging(config: &DaemonConfig) -> LogTargets {
    let journald = if Path::new(paths::JOURNALD_SOCKET).exists() {
        match tracing_journald::layer() {
            Ok(layer) => Some(layer),
            Err(e) => {
                eprintln!("Failed to create journald layer: {}, falling back to stdout", e);
                None
            }
        }
    } else {
        None
    };

    let console = if journald.is_none() {
        Some(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(ChronoLocal::new(logging::TIMESTAMP_FORMAT.to_string())),
        )
    } else {
        None
    };

    let (file_layer, file_error) = match config.log_file.as_deref().map(open_log_file) {
        Some(Ok(file)) => {
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_timer(ChronoLocal::new(logging::TIMESTAMP_FORMAT.to_string()))
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let targets = LogTargets {
        journald: journald.is_some(),
        file: file_layer.as_ref().and(config.log_file.clone()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_level))
        .with(journald)
        .with(console)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!(error = %format!("{:#}", e), "Log file unavailable, logging to console only");
    }

    targets
}

/// Open a log file for appending, creating its directory if needed
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}
