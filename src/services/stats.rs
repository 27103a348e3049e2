//! Aggregate statistics for a directory subtree

use crate::io::logstore::LogStore;
use crate::models::DirectoryStats;
use crate::services::format::{format_bytes, format_timestamp};
use crate::services::ops::{display_name, fail, note};
use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Compute statistics for one directory.
///
/// Files are counted across the whole subtree, subdirectories one level deep
/// only. Symlinks are not followed and contribute nothing. Any I/O failure
/// during the walk aborts the whole call; there is no partial result.
pub fn directory_stats(logs: &LogStore, path: &Path) -> Result<DirectoryStats> {
    let name = display_name(path);

    if !path.exists() {
        note(logs, &format!("Directory '{name}' doesn't exist"));
        return Err(Error::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        note(logs, &format!("Chosen path '{name}' is not a directory"));
        return Err(Error::InvalidInput(format!("'{name}' is not a directory")));
    }

    match collect(path) {
        Ok(collected) => Ok(DirectoryStats {
            name,
            file_count: collected.file_count,
            byte_size: collected.byte_size,
            size: format_bytes(collected.byte_size),
            subdirectory_count: collected.subdirectory_count,
            creation_time: format_timestamp(collected.created),
        }),
        Err(err) => Err(fail(
            logs,
            "directory_stats",
            &format!("retrieving stats for directory '{name}'"),
            err.into(),
        )),
    }
}

struct Collected {
    file_count: u64,
    byte_size: u64,
    subdirectory_count: u64,
    created: SystemTime,
}

fn collect(root: &Path) -> io::Result<Collected> {
    let metadata = fs::metadata(root)?;
    let created = creation_time(&metadata)?;

    let mut collected = Collected {
        file_count: 0,
        byte_size: 0,
        subdirectory_count: 0,
        created,
    };

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let entry_path = entry.path();
        let entry_metadata = fs::symlink_metadata(&entry_path)?;

        if entry_metadata.is_dir() {
            collected.subdirectory_count += 1;
            sum_subtree(&entry_path, &mut collected)?;
        } else if entry_metadata.is_file() {
            collected.file_count += 1;
            collected.byte_size += entry_metadata.len();
        }
    }

    Ok(collected)
}

/// Fold a nested directory's files into the totals. Nested directories are
/// recursed into but not added to `subdirectory_count` (one level only).
fn sum_subtree(dir: &Path, collected: &mut Collected) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let entry_path = entry.path();
        let entry_metadata = fs::symlink_metadata(&entry_path)?;

        if entry_metadata.is_dir() {
            sum_subtree(&entry_path, collected)?;
        } else if entry_metadata.is_file() {
            collected.file_count += 1;
            collected.byte_size += entry_metadata.len();
        }
    }
    Ok(())
}

/// Creation timestamp with a modification-time fallback for filesystems that
/// do not expose birth time.
pub(crate) fn creation_time(metadata: &fs::Metadata) -> io::Result<SystemTime> {
    metadata.created().or_else(|_| metadata.modified())
}
