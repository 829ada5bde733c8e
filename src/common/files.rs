//! Filesystem primitives with `chmod +x` and `mv` semantics.
//!
//! Errors are returned as raw `io::Error`s so callers can report exactly what the
//! operating system said.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Add the executable bits (`0o111`) to a file, keeping its other mode bits.
pub fn set_executable(path: &Path) -> io::Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)
}

/// Move `src` to `dst`, replacing anything already at `dst`.
///
/// Tries `rename(2)` first. When the two paths live on different filesystems the
/// file is copied next to `dst`, renamed over it, and `src` is removed.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Err(e) if e.raw_os_error() == Some(libc::EXDEV) => copy_then_remove(src, dst),
        other => other,
    }
}

/// Cross-device half of [`move_file`].
///
/// The copy lands in a sibling temp file first so a binary that is currently
/// running at `dst` is replaced rather than truncated in place.
pub(crate) fn copy_then_remove(src: &Path, dst: &Path) -> io::Result<()> {
    let staging = staging_path(dst);

    if let Err(e) = fs::copy(src, &staging).and_then(|_| fs::rename(&staging, dst)) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }

    fs::remove_file(src)
}

fn staging_path(dst: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(dst.file_name().unwrap_or_default());
    name.push(".installing");
    dst.with_file_name(name)
}
