//! Persisting the encoded result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `bytes` to `path`, creating parent directories as needed.
///
/// Data goes to a hidden sibling file first and is renamed into place, so an
/// existing file at `path` is either fully replaced or left untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let tmp = temp_sibling(parent, path)?;
    let result = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_sibling(parent: &Path, path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path {} has no file name", path.display()),
        )
    })?;
    Ok(parent.join(format!(".{}.part", name.to_string_lossy())))
}
