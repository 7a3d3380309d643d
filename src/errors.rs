//! Unified application error types.
//! The log file layer returns `ReadError` / `WriteError`; everything above it
//! (core, cli, config) returns `AppError` so the caller decides how to exit.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single CSV record that could not be decoded at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: cannot decode row ({reason}): {raw}")]
pub struct RowDecodeError {
    pub line: u64,
    pub raw: String,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Log file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid header in {}: {reason}", path.display())]
    Header { path: PathBuf, reason: String },

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to open/create log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read log header of {}: {reason}", path.display())]
    Header { path: PathBuf, reason: String },

    #[error(
        "Title chain needs {required} title columns but {} declares only {width}",
        path.display()
    )]
    ChainTooDeep {
        path: PathBuf,
        required: usize,
        width: usize,
    },

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Failed to write log record to {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to flush {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to sync {}: {source}", path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to widen header of {}: {reason}", path.display())]
    Rewrite { path: PathBuf, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Log file
    // ---------------------------
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid task titles: {0}")]
    InvalidTitles(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid date or period: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
