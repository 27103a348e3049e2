//! Enumeration of the platform Downloads folder
//!
//! Listings are immediate children only, with hidden/system entries filtered
//! out. Entries are recomputed on every call; nothing is cached.

use crate::io::logstore::LogStore;
use crate::models::{DownloadsSummary, FileEntry, FileKind};
use crate::services::format::{format_bytes, format_timestamp};
use crate::services::ops::{debug_note, fail};
use crate::services::stats::creation_time;
use crate::{Result, platform};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the platform Downloads folder.
pub fn downloads_directory() -> Result<PathBuf> {
    platform::downloads_dir()
}

/// List the visible immediate children of `dir`, name-sorted.
pub fn visible_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !platform::is_hidden_or_system(&path) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Map every visible child of `dir` to a [`FileEntry`].
///
/// Entries that vanish between listing and stat are skipped; an empty folder
/// is noted in the debug log.
pub fn file_entries(logs: &LogStore, dir: &Path) -> Result<Vec<FileEntry>> {
    let paths = match visible_entries(dir) {
        Ok(paths) => paths,
        Err(err) => {
            return Err(fail(
                logs,
                "file_entries",
                &format!("listing directory '{}'", dir.display()),
                err,
            ));
        }
    };

    if paths.is_empty() {
        debug_note(logs, "file_entries", "Downloads directory doesn't contain any files");
    }

    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                log::debug!("skipping vanished entry {}: {err}", path.display());
                continue;
            }
        };

        let created = match creation_time(&metadata) {
            Ok(created) => created,
            Err(err) => {
                log::debug!("no usable timestamp for {}: {err}", path.display());
                continue;
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map_or_else(|| file_name.clone(), |stem| stem.to_string_lossy().into_owned());
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let absolute = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());

        entries.push(FileEntry {
            name,
            suffix,
            kind: classify(&path, &metadata),
            size: format_bytes(metadata.len()),
            byte_size: metadata.len(),
            creation_date: format_timestamp(created),
            path: absolute.display().to_string(),
        });
    }

    Ok(entries)
}

/// First-match-wins classification: directory, file, symlink, unknown.
fn classify(path: &Path, metadata: &fs::Metadata) -> FileKind {
    if metadata.is_dir() {
        FileKind::Directory
    } else if metadata.is_file() {
        FileKind::File
    } else if path.is_symlink() {
        FileKind::Symlink
    } else {
        FileKind::Unknown
    }
}

/// Aggregate a list of entries into a summary. Pure; `None` on empty input.
#[must_use]
pub fn summarize(entries: &[FileEntry]) -> Option<DownloadsSummary> {
    if entries.is_empty() {
        return None;
    }

    let mut total_bytes = 0u64;
    let mut suffixes_count: BTreeMap<String, u64> = BTreeMap::new();
    let mut bytes_per_suffix: BTreeMap<String, u64> = BTreeMap::new();

    for entry in entries {
        total_bytes += entry.byte_size;
        *suffixes_count.entry(entry.suffix.clone()).or_default() += 1;
        *bytes_per_suffix.entry(entry.suffix.clone()).or_default() += entry.byte_size;
    }

    let size_per_suffix = bytes_per_suffix
        .iter()
        .map(|(suffix, bytes)| (suffix.clone(), format_bytes(*bytes)))
        .collect();

    Some(DownloadsSummary {
        total_files: entries.len() as u64,
        total_bytes,
        total_size: format_bytes(total_bytes),
        suffixes_count,
        bytes_per_suffix,
        size_per_suffix,
    })
}

/// Enumerate `dir` and aggregate the result.
///
/// An empty folder writes a debug notice and yields `Ok(None)`.
pub fn downloads_summary(logs: &LogStore, dir: &Path) -> Result<Option<DownloadsSummary>> {
    let entries = file_entries(logs, dir)?;

    match summarize(&entries) {
        Some(summary) => Ok(Some(summary)),
        None => {
            debug_note(
                logs,
                "downloads_summary",
                "Downloads directory doesn't contain any file entries",
            );
            Ok(None)
        }
    }
}
