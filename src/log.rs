// File logging. stdout and stderr belong to the TUI while it runs.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TFWS_LOG";

/// `TFWS_LOG` directives take precedence; `--debug` alone means `tfws=debug`.
fn build_filter(debug: bool, directives: Option<String>) -> Result<Option<EnvFilter>> {
    if let Some(d) = directives {
        let filter = EnvFilter::try_new(&d)
            .with_context(|| format!("invalid {LOG_ENV} filter {d:?}"))?;
        return Ok(Some(filter));
    }
    Ok(debug.then(|| EnvFilter::new("tfws=debug")))
}

/// Install the global subscriber if logging was asked for. Returns the log path.
pub fn init(debug: bool, log_file: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(filter) = build_filter(debug, std::env::var(LOG_ENV).ok())? else {
        return Ok(None);
    };
    let path = log_file.context("no log file location available")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))?;

    Ok(Some(path.to_path_buf()))
}
