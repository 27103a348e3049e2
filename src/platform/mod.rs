//! Platform-specific seams with per-OS implementations
//!
//! Downloads-folder resolution, hidden/system attribute checks, and the
//! attribute toggles behind folder icon customization. Windows goes through
//! `windows-sys`; other platforms get functional fallbacks so the rest of the
//! crate stays exercisable everywhere.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

#[cfg(windows)]
use std::os::windows::ffi::{OsStrExt, OsStringExt};

#[cfg(windows)]
use windows_sys::Win32::Storage::FileSystem::{
    FILE_ATTRIBUTE_HIDDEN, FILE_ATTRIBUTE_SYSTEM, GetFileAttributesW, INVALID_FILE_ATTRIBUTES,
    SetFileAttributesW,
};

/// Convert a path to a NUL-terminated wide string (UTF-16)
#[cfg(windows)]
fn wide(path: &Path) -> Vec<u16> {
    path.as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

/// Resolve the user's Downloads folder (Windows).
///
/// Uses the known-folder API keyed by `FOLDERID_Downloads`, the same
/// well-known GUID the shell stores under the user's Shell Folders registry
/// key.
#[cfg(windows)]
pub fn downloads_dir() -> Result<PathBuf> {
    use std::ffi::OsString;
    use windows_sys::Win32::System::Com::CoTaskMemFree;
    use windows_sys::Win32::UI::Shell::{FOLDERID_Downloads, KF_FLAG_DEFAULT, SHGetKnownFolderPath};

    let mut raw: windows_sys::core::PWSTR = std::ptr::null_mut();
    let hr = unsafe {
        SHGetKnownFolderPath(
            &FOLDERID_Downloads,
            KF_FLAG_DEFAULT,
            std::ptr::null_mut(),
            &mut raw,
        )
    };

    if hr < 0 || raw.is_null() {
        return Err(Error::System(format!(
            "SHGetKnownFolderPath(FOLDERID_Downloads) failed: HRESULT {hr:#010x}"
        )));
    }

    let len = (0..).take_while(|&i| unsafe { *raw.add(i) } != 0).count();
    let os = OsString::from_wide(unsafe { std::slice::from_raw_parts(raw, len) });
    unsafe { CoTaskMemFree(raw as *const core::ffi::c_void) };

    Ok(PathBuf::from(os))
}

/// Resolve the user's Downloads folder (non-Windows).
#[cfg(not(windows))]
pub fn downloads_dir() -> Result<PathBuf> {
    dirs::download_dir().ok_or_else(|| {
        Error::System("no Downloads directory is defined for this user".to_string())
    })
}

/// Check the hidden/system attribute bits (Windows).
///
/// Unreadable attributes count as hidden, so entries the process cannot
/// inspect are excluded from listings rather than surfaced half-known.
#[cfg(windows)]
#[must_use]
pub fn is_hidden_or_system(path: &Path) -> bool {
    let attrs = unsafe { GetFileAttributesW(wide(path).as_ptr()) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return true;
    }
    attrs & (FILE_ATTRIBUTE_HIDDEN | FILE_ATTRIBUTE_SYSTEM) != 0
}

/// Dotfile check (non-Windows).
#[cfg(not(windows))]
#[must_use]
pub fn is_hidden_or_system(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Mark a folder as system and its icon descriptor as hidden (Windows).
///
/// The system bit on the folder is what makes Explorer read `desktop.ini`.
#[cfg(windows)]
pub fn mark_icon_attributes(dir: &Path, descriptor: &Path) -> Result<()> {
    add_attributes(dir, FILE_ATTRIBUTE_SYSTEM)?;
    add_attributes(descriptor, FILE_ATTRIBUTE_HIDDEN)
}

/// Attribute toggles are meaningless off Windows; the descriptor file alone
/// carries the customization state.
#[cfg(not(windows))]
pub fn mark_icon_attributes(_dir: &Path, _descriptor: &Path) -> Result<()> {
    Ok(())
}

/// Clear the system and hidden bits set by [`mark_icon_attributes`] (Windows).
#[cfg(windows)]
pub fn clear_icon_attributes(dir: &Path) -> Result<()> {
    let wide_path = wide(dir);
    let attrs = unsafe { GetFileAttributesW(wide_path.as_ptr()) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return Err(last_attribute_error(dir));
    }

    let cleared = attrs & !(FILE_ATTRIBUTE_SYSTEM | FILE_ATTRIBUTE_HIDDEN);
    let status = unsafe { SetFileAttributesW(wide_path.as_ptr(), cleared) };
    if status == 0 {
        return Err(last_attribute_error(dir));
    }
    Ok(())
}

#[cfg(not(windows))]
pub fn clear_icon_attributes(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(windows)]
fn add_attributes(path: &Path, bits: u32) -> Result<()> {
    let wide_path = wide(path);
    let attrs = unsafe { GetFileAttributesW(wide_path.as_ptr()) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return Err(last_attribute_error(path));
    }

    let status = unsafe { SetFileAttributesW(wide_path.as_ptr(), attrs | bits) };
    if status == 0 {
        return Err(last_attribute_error(path));
    }
    Ok(())
}

#[cfg(windows)]
fn last_attribute_error(path: &Path) -> Error {
    let err = std::io::Error::last_os_error();
    log::warn!("file attribute call failed for {}: {err}", path.display());
    Error::Io(err)
}
