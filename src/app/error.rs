use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DateError {
    #[error("Could not parse date \"{0}\".")]
    Invalid(String),

    #[error("Date {date} shifted by {offset} day(s) is out of range.")]
    OutOfRange { date: String, offset: i64 },
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("failed to launch {}: {source}", bin.display())]
    Spawn {
        bin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exited with {status}: {stderr}", bin.display())]
    Status {
        bin: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("malformed playlist document: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ResolveError {
    #[error("Could not find any matching video for {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub(crate) enum LaunchError {
    #[error("{} not found in PATH", bin.display())]
    NotFound { bin: PathBuf },

    #[error("failed to start {}: {source}", bin.display())]
    Exec {
        bin: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
