// BashOut - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors keep their causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all BashOut operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum BashOutError {
    /// Manuscript store or lifecycle operation failed.
    Manuscript(ManuscriptError),
}

impl BashOutError {
    /// Message suitable for a user-facing warning dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::Manuscript(e) => e.user_message(),
        }
    }
}

impl fmt::Display for BashOutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manuscript(e) => write!(f, "Manuscript error: {e}"),
        }
    }
}

impl std::error::Error for BashOutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Manuscript(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Manuscript errors
// ---------------------------------------------------------------------------

/// Errors raised by the manuscript store and the manuscript lifecycle.
#[derive(Debug)]
pub enum ManuscriptError {
    /// The manuscript name cannot be used as a file name.
    InvalidName { name: String, reason: &'static str },

    /// An operation that needs an active manuscript was attempted without one.
    NoActiveManuscript,

    /// Rename target is already taken by another manuscript.
    AlreadyExists { name: String, path: PathBuf },

    /// Rename source does not exist on disk.
    NotFound { name: String, path: PathBuf },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl ManuscriptError {
    /// Message suitable for a user-facing warning dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidName { name, reason } => {
                format!("'{name}' cannot be used as a manuscript name: {reason}.")
            }
            Self::NoActiveManuscript => "No manuscript is open.".to_string(),
            Self::AlreadyExists { name, .. } => {
                format!("A manuscript named '{name}' already exists.")
            }
            Self::NotFound { name, .. } => {
                format!("The manuscript file for '{name}' could not be found.")
            }
            Self::Io { .. } => format!("{self}"),
        }
    }
}

impl fmt::Display for ManuscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { name, reason } => {
                write!(f, "Invalid manuscript name '{name}': {reason}")
            }
            Self::NoActiveManuscript => write!(f, "No manuscript is active"),
            Self::AlreadyExists { name, path } => write!(
                f,
                "Manuscript '{name}' already exists at '{}'",
                path.display()
            ),
            Self::NotFound { name, path } => write!(
                f,
                "Manuscript '{name}' not found at '{}'",
                path.display()
            ),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ManuscriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ManuscriptError> for BashOutError {
    fn from(e: ManuscriptError) -> Self {
        Self::Manuscript(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to the configuration record and preferences file.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// JSON (de)serialisation of the configuration record failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The record carries a schema version this build does not understand.
    VersionMismatch { path: PathBuf, found: u32, expected: u32 },

    /// I/O error reading or writing a config file.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "Config record error '{}': {source}", path.display())
            }
            Self::VersionMismatch {
                path,
                found,
                expected,
            } => write!(
                f,
                "Config record '{}' has version {found}, expected {expected}",
                path.display()
            ),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "Config I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::VersionMismatch { .. } => None,
        }
    }
}

/// Convenience type alias for BashOut results.
pub type Result<T> = std::result::Result<T, BashOutError>;
