//! Directory lifecycle operations
//!
//! Every operation reports its outcome twice: a notice in the human audit log
//! and a typed `Result` for the caller. Unexpected filesystem failures add a
//! structured ERROR record to the debug log. Audit-log write failures never
//! change an operation's result; they degrade to `log::warn!`.

use crate::io::logstore::LogStore;
use crate::{Error, Result, platform};
use std::fs;
use std::path::{Path, PathBuf};

/// Check if a directory already exists at the given path.
#[must_use]
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Check if the directory has no entries at all.
pub fn is_directory_empty(path: &Path) -> Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Create `name` under `parent`, with intermediate parents as needed.
///
/// An existing target is a logged notice and an `AlreadyExists` error; the
/// second of two identical calls changes nothing on disk.
pub fn create_directory(logs: &LogStore, parent: &Path, name: &str) -> Result<PathBuf> {
    let target = parent.join(name);

    if directory_exists(&target) {
        note(
            logs,
            &format!("Directory '{name}' already exists in '{}'", parent.display()),
        );
        return Err(Error::AlreadyExists(target));
    }

    match fs::create_dir_all(&target) {
        Ok(()) => {
            note(
                logs,
                &format!("Directory '{name}' has been created at '{}'", parent.display()),
            );
            Ok(target)
        }
        Err(err) => Err(fail(
            logs,
            "create_directory",
            &format!("creating directory '{name}'"),
            err.into(),
        )),
    }
}

/// Move an empty directory to the system trash.
///
/// Refuses non-empty directories: this entry point never discards contents.
pub fn move_directory_to_trash(logs: &LogStore, path: &Path) -> Result<()> {
    let name = display_name(path);

    if !directory_exists(path) {
        note(logs, &format!("Directory '{name}' doesn't exist"));
        return Err(Error::NotFound(path.to_path_buf()));
    }

    match is_directory_empty(path) {
        Ok(false) => {
            note(logs, &format!("Directory '{name}' still contains files"));
            Err(Error::NotEmpty(path.to_path_buf()))
        }
        Ok(true) => match trash::delete(path) {
            Ok(()) => {
                note(logs, &format!("Directory '{name}' has been moved to trash"));
                Ok(())
            }
            Err(err) => Err(fail(
                logs,
                "move_directory_to_trash",
                &format!("moving directory '{name}' to trash"),
                Error::System(err.to_string()),
            )),
        },
        Err(err) => Err(fail(
            logs,
            "move_directory_to_trash",
            &format!("moving directory '{name}' to trash"),
            err,
        )),
    }
}

/// Remove an empty directory.
///
/// Same safety gate as [`move_directory_to_trash`]; use
/// [`remove_directory_all`] to discard contents deliberately.
pub fn remove_directory(logs: &LogStore, path: &Path) -> Result<()> {
    let name = display_name(path);

    if !directory_exists(path) {
        note(logs, &format!("Directory '{name}' doesn't exist"));
        return Err(Error::NotFound(path.to_path_buf()));
    }

    match is_directory_empty(path) {
        Ok(false) => {
            note(logs, &format!("Directory '{name}' still contains files"));
            Err(Error::NotEmpty(path.to_path_buf()))
        }
        Ok(true) => match fs::remove_dir(path) {
            Ok(()) => {
                note(logs, &format!("Directory '{name}' has been removed"));
                Ok(())
            }
            Err(err) => Err(fail(
                logs,
                "remove_directory",
                &format!("removing directory '{name}'"),
                err.into(),
            )),
        },
        Err(err) => Err(fail(
            logs,
            "remove_directory",
            &format!("removing directory '{name}'"),
            err,
        )),
    }
}

/// Recursively delete a directory and everything inside it.
///
/// The unconditional counterpart of [`remove_directory`], kept separate so
/// callers opt into data loss explicitly.
pub fn remove_directory_all(logs: &LogStore, path: &Path) -> Result<()> {
    let name = display_name(path);

    if !directory_exists(path) {
        note(logs, &format!("Directory '{name}' doesn't exist"));
        return Err(Error::NotFound(path.to_path_buf()));
    }

    match fs::remove_dir_all(path) {
        Ok(()) => {
            note(
                logs,
                &format!("Directory '{name}' has been removed with all its contents"),
            );
            Ok(())
        }
        Err(err) => Err(fail(
            logs,
            "remove_directory_all",
            &format!("removing directory '{name}'"),
            err.into(),
        )),
    }
}

/// Rename a directory within its parent.
///
/// A new name equal to the current one performs no filesystem call and logs a
/// no-op notice.
pub fn rename_directory(logs: &LogStore, path: &Path, new_name: &str) -> Result<PathBuf> {
    let name = display_name(path);
    let Some(parent) = path.parent() else {
        let err = Error::InvalidInput(format!("'{}' has no parent to rename within", path.display()));
        return Err(fail(logs, "rename_directory", &format!("renaming directory '{name}'"), err));
    };
    let new_path = parent.join(new_name);

    if new_path == path {
        note(logs, "New directory name matches the old one. Nothing happened");
        return Ok(path.to_path_buf());
    }

    match fs::rename(path, &new_path) {
        Ok(()) => {
            note(
                logs,
                &format!("Directory name '{name}' has been changed to '{new_name}'"),
            );
            Ok(new_path)
        }
        Err(err) => Err(fail(
            logs,
            "rename_directory",
            &format!("renaming directory '{name}'"),
            err.into(),
        )),
    }
}

/// Move a directory to a new location.
///
/// Refuses a missing source or an occupied destination; never overwrites or
/// merges. Cross-device moves surface the underlying I/O error.
pub fn move_directory(logs: &LogStore, path: &Path, dest: &Path) -> Result<()> {
    let name = display_name(path);

    if !directory_exists(path) {
        note(
            logs,
            &format!("Directory '{name}' does not exist and cannot be moved"),
        );
        return Err(Error::NotFound(path.to_path_buf()));
    }

    if dest.exists() {
        note(
            logs,
            &format!(
                "Cannot move directory '{name}': destination '{}' is already occupied",
                dest.display()
            ),
        );
        return Err(Error::AlreadyExists(dest.to_path_buf()));
    }

    match fs::rename(path, dest) {
        Ok(()) => {
            note(
                logs,
                &format!("Directory '{name}' has been moved to '{}'", dest.display()),
            );
            Ok(())
        }
        Err(err) => Err(fail(
            logs,
            "move_directory",
            &format!("moving directory '{name}'"),
            err.into(),
        )),
    }
}

/// Folder-customization descriptor written next to an iconized folder.
pub const ICON_DESCRIPTOR: &str = "desktop.ini";

/// Assign a custom icon to a folder through a `desktop.ini` descriptor.
///
/// The icon file must exist and carry an `.ico` extension. On Windows the
/// folder gains the system attribute and the descriptor the hidden attribute;
/// elsewhere only the descriptor is written.
pub fn set_folder_icon(logs: &LogStore, dir: &Path, icon: &Path) -> Result<()> {
    let name = display_name(dir);

    if !dir.exists() {
        note(logs, &format!("Directory '{name}' doesn't exist"));
        return Err(Error::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        note(logs, &format!("Chosen path '{name}' is not a directory"));
        return Err(Error::InvalidInput(format!("'{name}' is not a directory")));
    }

    let icon_name = display_name(icon);
    if !icon.exists() {
        note(logs, &format!("Chosen icon '{icon_name}' doesn't exist"));
        return Err(Error::NotFound(icon.to_path_buf()));
    }

    let is_ico = icon
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ico"));
    if !is_ico {
        note(
            logs,
            &format!("Chosen file '{icon_name}' is not an icon file. Required type: '.ico'"),
        );
        return Err(Error::InvalidInput(format!(
            "'{icon_name}' is not an .ico file"
        )));
    }

    let descriptor = dir.join(ICON_DESCRIPTOR);
    let contents = format!(
        "[.ShellClassInfo]\nIconResource={},0\n[ViewState]\nMode=\nVid=\nFolderType=Generic\n",
        icon.display()
    );

    if let Err(err) = fs::write(&descriptor, contents) {
        return Err(fail(
            logs,
            "set_folder_icon",
            &format!("setting icon for directory '{name}'"),
            err.into(),
        ));
    }

    if let Err(err) = platform::mark_icon_attributes(dir, &descriptor) {
        return Err(fail(
            logs,
            "set_folder_icon",
            &format!("setting icon for directory '{name}'"),
            err,
        ));
    }

    note(logs, &format!("Icon set for directory '{name}'"));
    Ok(())
}

/// Restore a folder's default icon by deleting its `desktop.ini` descriptor.
///
/// A folder without a descriptor is already in the default state; that is a
/// logged notice, not an error.
pub fn reset_folder_icon(logs: &LogStore, dir: &Path) -> Result<()> {
    let name = display_name(dir);

    if !dir.exists() {
        note(logs, &format!("Directory '{name}' doesn't exist"));
        return Err(Error::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        note(logs, &format!("Chosen path '{name}' is not a directory"));
        return Err(Error::InvalidInput(format!("'{name}' is not a directory")));
    }

    let descriptor = dir.join(ICON_DESCRIPTOR);
    if !descriptor.exists() {
        note(logs, &format!("Directory '{name}' already has the default icon"));
        return Ok(());
    }

    if let Err(err) = fs::remove_file(&descriptor) {
        return Err(fail(
            logs,
            "reset_folder_icon",
            &format!("restoring the default icon for directory '{name}'"),
            err.into(),
        ));
    }

    if let Err(err) = platform::clear_icon_attributes(dir) {
        return Err(fail(
            logs,
            "reset_folder_icon",
            &format!("restoring the default icon for directory '{name}'"),
            err,
        ));
    }

    note(logs, &format!("Default icon restored for directory '{name}'"));
    Ok(())
}

/// Last path component for log messages, falling back to the whole path.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Write a human-log notice; a failed write is warned about, never fatal.
pub(crate) fn note(logs: &LogStore, message: &str) {
    if let Err(err) = logs.write_log(message) {
        log::warn!("audit log write failed: {err}");
    }
}

/// Write a debug-log INFO record; a failed write is warned about, never fatal.
#[track_caller]
pub(crate) fn debug_note(logs: &LogStore, function: &str, message: &str) {
    if let Err(err) = logs.write_debug(function, message) {
        log::warn!("debug log write failed: {err}");
    }
}

/// Record a failed operation: one debug ERROR record naming the operation,
/// one human-log line naming the action, then hand the error back.
#[track_caller]
pub(crate) fn fail(logs: &LogStore, function: &str, action: &str, error: Error) -> Error {
    if let Err(err) = logs.write_debug_error(function, &error) {
        log::warn!("debug log write failed: {err}");
    }
    note(logs, &format!("Error occurred while {action}"));
    error
}
