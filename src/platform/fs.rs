// BashOut - platform/fs.rs
//
// Filesystem helpers shared by the configuration layers.

use std::io;
use std::path::{Path, PathBuf};

/// Sibling temp path used while `path` is being replaced.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the file at `path` with `contents` (write temp, then rename).
///
/// Parent directories are created as needed. A crash between the write and
/// the rename leaves the previous file intact.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = temp_path_for(path);
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        e
    })
}
