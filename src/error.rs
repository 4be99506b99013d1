//! Error types for the picker core.
//!
//! - `ProviderError` for failed workspace commands
//! - `Error` for everything that can end a picker session

use std::io;
use thiserror::Error;

/// Errors raised by a workspace provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to {action} workspace {name}: {message}")]
    CommandFailed {
        action: &'static str,
        name: String,
        message: String,
    },

    #[error("failed to list workspaces: {0}")]
    ListFailed(String),

    #[error("failed to capture provider output: {0}")]
    Output(#[from] io::Error),
}

/// Top-level error for a picker session.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to initialize terminal: {0}")]
    SurfaceInit(#[source] io::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("event loop failed: {0}")]
    EventLoop(String),
}

pub type Result<T> = std::result::Result<T, Error>;
