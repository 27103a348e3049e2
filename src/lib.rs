//! Downloads Folder Manager Library
//!
//! This library provides directory lifecycle operations (create, rename, move,
//! delete, trash, folder icons), aggregate statistics for directory trees, and
//! enumeration of the platform Downloads folder. Every operation writes its
//! outcome to a prepend-style audit log (newest entry first) while also
//! returning a typed result.

pub mod cli;
pub mod io;
pub mod models;
pub mod platform;
pub mod services;

pub use io::logstore::{LogConfig, LogStore};
pub use models::{DirectoryStats, DownloadsSummary, FileEntry, FileKind};

use std::path::PathBuf;
use std::result;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// The addressed path does not exist
    NotFound(PathBuf),
    /// A safety-gated operation refused to act on a non-empty directory
    NotEmpty(PathBuf),
    /// Create/move collision: the target already exists
    AlreadyExists(PathBuf),
    InvalidInput(String),
    Io(std::io::Error),
    System(String),
}

impl Error {
    /// Short code carried in debug-log records, errno-style.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "ENOENT",
            Error::NotEmpty(_) => "ENOTEMPTY",
            Error::AlreadyExists(_) => "EEXIST",
            Error::InvalidInput(_) => "EINVAL",
            Error::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => "ENOENT",
                std::io::ErrorKind::PermissionDenied => "EACCES",
                _ => "IO",
            },
            Error::System(_) => "SYSTEM",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "Path does not exist: {}", path.display()),
            Error::NotEmpty(path) => write!(f, "Directory is not empty: {}", path.display()),
            Error::AlreadyExists(path) => write!(f, "Path already exists: {}", path.display()),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::System(msg) => write!(f, "System error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;
