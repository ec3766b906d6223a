// BashOut - app/record.rs
//
// Configuration record persistence: the chosen save directory and the
// active manuscript name, kept between runs in `state.json`.
//
// - Saves are atomic (write temp, rename) so a crash mid-save never corrupts
//   the previous record.
// - A record that cannot be read or parsed is treated as absent: the app
//   starts with defaults and runs first-run setup again.

use crate::platform::fs::write_atomic;
use crate::util::constants::STATE_VERSION;
use crate::util::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_version() -> u32 {
    STATE_VERSION
}

/// Persisted configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Schema version; records written before versioning default to 1.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory new manuscripts are created in.
    pub save_dir: PathBuf,

    /// Name of the manuscript to reopen at startup.
    #[serde(default)]
    pub current_manuscript: Option<String>,
}

impl ConfigRecord {
    /// Record for a first run: default directory, no manuscript.
    pub fn with_defaults(save_dir: PathBuf) -> Self {
        Self {
            version: STATE_VERSION,
            save_dir,
            current_manuscript: None,
        }
    }
}

/// Result of reading the record from disk.
#[derive(Debug)]
pub enum RecordLoad {
    Loaded(ConfigRecord),
    Missing,
    Invalid(ConfigError),
}

/// Record plus what the caller needs to know about how it was obtained.
#[derive(Debug)]
pub struct LoadedRecord {
    pub record: ConfigRecord,
    /// No usable record existed; the caller should run first-run setup.
    pub first_run: bool,
    /// Why an existing record was discarded.
    pub warning: Option<String>,
}

/// Write `record` to `path`, replacing any previous record atomically.
pub fn save(record: &ConfigRecord, path: &Path) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(record).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    write_atomic(path, json.as_bytes()).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })?;

    tracing::debug!(path = %path.display(), "Config record saved");
    Ok(())
}

/// Read the record at `path`.
pub fn load(path: &Path) -> RecordLoad {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return RecordLoad::Missing,
        Err(source) => {
            return RecordLoad::Invalid(ConfigError::Io {
                path: path.to_path_buf(),
                operation: "read",
                source,
            })
        }
    };

    let record: ConfigRecord = match serde_json::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            return RecordLoad::Invalid(ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if record.version != STATE_VERSION {
        return RecordLoad::Invalid(ConfigError::VersionMismatch {
            path: path.to_path_buf(),
            found: record.version,
            expected: STATE_VERSION,
        });
    }

    tracing::info!(path = %path.display(), "Config record loaded");
    RecordLoad::Loaded(record)
}

/// Read the record at `path`, falling back to defaults rooted at
/// `default_save_dir`. Never fails.
pub fn load_or_default(path: &Path, default_save_dir: &Path) -> LoadedRecord {
    match load(path) {
        RecordLoad::Loaded(record) => LoadedRecord {
            record,
            first_run: false,
            warning: None,
        },
        RecordLoad::Missing => {
            tracing::info!(path = %path.display(), "No config record found; first run");
            LoadedRecord {
                record: ConfigRecord::with_defaults(default_save_dir.to_path_buf()),
                first_run: true,
                warning: None,
            }
        }
        RecordLoad::Invalid(e) => {
            tracing::warn!(error = %e, "Config record unusable; starting fresh");
            LoadedRecord {
                record: ConfigRecord::with_defaults(default_save_dir.to_path_buf()),
                first_run: true,
                warning: Some(format!("{e}. Starting with default settings.")),
            }
        }
    }
}
