//! Capability-based file access for the courier CLI.
//!
//! Paths are UTF-8 (`camino`) and every operation opens the containing
//! directory with ambient authority before touching the file (`cap-std`).
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open an existing file for reading.
///
/// # Errors
///
/// Propagates the IO error from opening the file.
pub fn open_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
///
/// Returns `NotFound` when neither the parent directory nor the file exists,
/// or any other IO error raised while inspecting metadata.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create (or truncate) `path` for writing, creating missing parent
/// directories first.
///
/// # Errors
///
/// Returns an error if `path` has no file name, or if a directory or the file
/// itself cannot be created.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (ancestor, relative) = split_at_root(parent_of(path))?;
    if !matches!(relative.as_str(), "" | ".") {
        ancestor.create_dir_all(&relative)?;
    }
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name.as_str())
}

fn parent_of(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} has no file name")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent_of(path), ambient_authority())?;
    Ok((dir, name))
}

/// Split a directory path into an openable anchor and the remainder below it.
///
/// Absolute paths anchor at their root or prefix; relative paths anchor at
/// the current directory.
fn split_at_root(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let anchor: Utf8PathBuf = if dir.is_absolute() {
        dir.ancestors()
            .last()
            .map_or_else(|| Utf8PathBuf::from("/"), Utf8Path::to_path_buf)
    } else {
        Utf8PathBuf::from(".")
    };
    let relative = if dir.is_absolute() {
        dir.strip_prefix(&anchor)
            .map_err(|_| io::Error::other(format!("{dir} is not below {anchor}")))?
            .to_path_buf()
    } else {
        dir.to_path_buf()
    };
    let handle = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((handle, relative))
}
