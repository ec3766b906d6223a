// BashOut - core/manuscript.rs
//
// Manuscript store: one plain-text file per manuscript at
// `<dir>/<name>.txt`, one sentence per line.
//
// Invariants:
// - The write path only ever extends a file. No operation here truncates,
//   rewrites, or deletes manuscript content.
// - `rename` never overwrites an existing manuscript.

use crate::core::words::count_text;
use crate::util::constants::{MANUSCRIPT_EXTENSION, MAX_MANUSCRIPT_NAME_BYTES};
use crate::util::error::ManuscriptError;
use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Summary of a successful append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReceipt {
    /// File that was extended.
    pub path: PathBuf,
    /// File length before the append.
    pub bytes_before: u64,
    /// Bytes written, including line terminators.
    pub bytes_written: u64,
    /// Words contributed by the appended text.
    pub words_added: usize,
}

/// Outcome of a rename request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Old and new names are identical; nothing was touched.
    Unchanged,
    /// The file now lives at the contained path.
    Renamed(PathBuf),
}

/// Trim and validate a manuscript name, returning the trimmed form.
pub fn validate_name(name: &str) -> Result<&str, ManuscriptError> {
    let trimmed = name.trim();
    let invalid = |reason| ManuscriptError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("name is empty"));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(invalid("name is reserved"));
    }
    if trimmed.contains(['/', '\\', '\0']) {
        return Err(invalid("name contains a path separator"));
    }
    if trimmed.len() > MAX_MANUSCRIPT_NAME_BYTES {
        return Err(invalid("name is too long"));
    }
    Ok(trimmed)
}

/// Path of the file backing manuscript `name` in `dir`.
pub fn manuscript_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{MANUSCRIPT_EXTENSION}"))
}

/// Create `dir` and the backing file for `name` if either is missing.
///
/// An existing file is left exactly as it is.
pub fn ensure(name: &str, dir: &Path) -> Result<PathBuf, ManuscriptError> {
    let name = validate_name(name)?;
    std::fs::create_dir_all(dir).map_err(|source| ManuscriptError::Io {
        path: dir.to_path_buf(),
        operation: "create directory",
        source,
    })?;

    let path = manuscript_path(dir, name);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ManuscriptError::Io {
            path: path.clone(),
            operation: "create",
            source,
        })?;

    tracing::debug!(manuscript = name, path = %path.display(), "Manuscript ensured");
    Ok(path)
}

/// Append `text` and a line terminator to manuscript `name` in `dir`.
///
/// The file must already exist (see `ensure`); a file removed behind the
/// application's back is an `Io` error, not silently recreated.
///
/// If the file does not already end with a newline (it was edited outside
/// the application), one is written first so `text` starts its own line and
/// cannot merge with the previous word. Existing bytes are never modified.
pub fn append(name: &str, dir: &Path, text: &str) -> Result<AppendReceipt, ManuscriptError> {
    let name = validate_name(name)?;
    let path = manuscript_path(dir, name);
    let io_err = |operation| {
        let path = path.clone();
        move |source| ManuscriptError::Io {
            path,
            operation,
            source,
        }
    };

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(&path)
        .map_err(io_err("open for append"))?;

    let bytes_before = file.metadata().map_err(io_err("stat"))?.len();
    let needs_separator =
        bytes_before > 0 && !ends_with_newline(&mut file).map_err(io_err("read tail"))?;

    let mut buf = String::with_capacity(text.len() + 2);
    if needs_separator {
        buf.push('\n');
    }
    buf.push_str(text);
    buf.push('\n');

    file.write_all(buf.as_bytes()).map_err(io_err("append"))?;
    file.flush().map_err(io_err("flush"))?;

    let receipt = AppendReceipt {
        path: path.clone(),
        bytes_before,
        bytes_written: buf.len() as u64,
        words_added: count_text(text),
    };
    tracing::debug!(
        manuscript = name,
        bytes_before = receipt.bytes_before,
        bytes_written = receipt.bytes_written,
        words = receipt.words_added,
        "Sentence appended"
    );
    Ok(receipt)
}

fn ends_with_newline(file: &mut std::fs::File) -> io::Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// The last non-empty line of manuscript `name`, trimmed.
///
/// Returns an empty string when the file is empty, missing, or unreadable;
/// the value is only ever displayed.
pub fn last_line(name: &str, dir: &Path) -> String {
    let path = manuscript_path(dir, name);
    match std::fs::read(&path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            let last = text
                .lines()
                .map(str::trim)
                .rfind(|line| !line.is_empty())
                .unwrap_or_default()
                .to_string();
            last
        }
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read last line");
            }
            String::new()
        }
    }
}

/// Rename manuscript `old_name` to `new_name` inside `dir`.
///
/// Fails with `AlreadyExists` when the destination is taken; in that case
/// neither file is touched.
pub fn rename(
    old_name: &str,
    new_name: &str,
    dir: &Path,
) -> Result<RenameOutcome, ManuscriptError> {
    let old_name = validate_name(old_name)?;
    let new_name = validate_name(new_name)?;
    if old_name == new_name {
        return Ok(RenameOutcome::Unchanged);
    }

    let old_path = manuscript_path(dir, old_name);
    let new_path = manuscript_path(dir, new_name);

    if new_path.exists() {
        return Err(ManuscriptError::AlreadyExists {
            name: new_name.to_string(),
            path: new_path,
        });
    }
    if !old_path.exists() {
        return Err(ManuscriptError::NotFound {
            name: old_name.to_string(),
            path: old_path,
        });
    }

    match move_no_clobber(&old_path, &new_path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(ManuscriptError::AlreadyExists {
                name: new_name.to_string(),
                path: new_path,
            })
        }
        Err(source) => {
            return Err(ManuscriptError::Io {
                path: old_path,
                operation: "rename",
                source,
            })
        }
    }

    tracing::info!(from = old_name, to = new_name, "Manuscript renamed");
    Ok(RenameOutcome::Renamed(new_path))
}

/// Move `from` to `to`, failing with `AlreadyExists` if `to` is taken.
///
/// Linking the new name first makes the existence check and the move a single
/// step. On filesystems without hard links this falls back to a plain rename,
/// which can still replace a file created at `to` after the caller checked.
fn move_no_clobber(from: &Path, to: &Path) -> io::Result<()> {
    match std::fs::hard_link(from, to) {
        Ok(()) => std::fs::remove_file(from).map_err(|e| {
            let _ = std::fs::remove_file(to);
            e
        }),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(e),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e),
        Err(e) => {
            tracing::debug!(error = %e, "Hard link unavailable; renaming in place");
            std::fs::rename(from, to)
        }
    }
}
