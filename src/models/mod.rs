//! Data models for Downloads entries, directory statistics, and summaries

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of a Downloads entry.
///
/// Classification is first-match-wins in the order directory, file, symlink,
/// unknown: a symlink that resolves to a directory is reported as a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
    Symlink,
    Unknown,
}

/// One immediate child of the Downloads folder.
///
/// Recomputed on every listing call; entries carry no cache and may go stale
/// as soon as the underlying file changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name without the suffix
    pub name: String,
    /// Suffix including the leading dot, empty when the name has none
    pub suffix: String,
    pub kind: FileKind,
    /// Human-readable rendering of `byte_size`; derived and lossy, never
    /// parsed back
    pub size: String,
    pub byte_size: u64,
    /// `YYYY-MM-DD HH:MM:SS`
    pub creation_date: String,
    /// Absolute path
    pub path: String,
}

/// Aggregate statistics for one directory, computed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub name: String,
    /// Files in the whole subtree
    pub file_count: u64,
    pub byte_size: u64,
    /// Human-readable rendering of `byte_size`
    pub size: String,
    /// Immediate subdirectories only, one level
    pub subdirectory_count: u64,
    /// `YYYY-MM-DD HH:MM:SS`
    pub creation_time: String,
}

/// Aggregates derived purely from a list of [`FileEntry`] values.
///
/// The `*_bytes` fields are the authoritative integers; the formatted strings
/// are derived renderings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadsSummary {
    pub total_files: u64,
    pub total_bytes: u64,
    pub total_size: String,
    pub suffixes_count: BTreeMap<String, u64>,
    pub bytes_per_suffix: BTreeMap<String, u64>,
    pub size_per_suffix: BTreeMap<String, String>,
}
