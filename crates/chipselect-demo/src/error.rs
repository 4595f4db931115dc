//! Demo errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or running a scripted session.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No suggestion labelled {0:?} is showing")]
    NotSuggested(String),
    #[error("No selected option labelled {0:?}")]
    NotSelected(String),
    #[error("Failed to write transcript: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;
