// BashOut - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "BashOut";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "BashOut";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Manuscripts
// =============================================================================

/// File extension for manuscript files (`<save_dir>/<name>.txt`).
pub const MANUSCRIPT_EXTENSION: &str = "txt";

/// Directory created under the user's documents folder on first run.
pub const DEFAULT_SAVE_DIR_NAME: &str = "BashOut";

/// Name pre-filled in the "New Manuscript" dialog.
pub const DEFAULT_MANUSCRIPT_NAME: &str = "untitled";

/// Longest accepted manuscript name in bytes. Leaves room for the extension
/// under the common 255-byte file name limit.
pub const MAX_MANUSCRIPT_NAME_BYTES: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Persisted configuration record (save directory + active manuscript).
pub const STATE_FILE_NAME: &str = "state.json";

/// Schema version written into `state.json`.
pub const STATE_VERSION: u32 = 1;

/// User-edited preferences file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Banner resources
// =============================================================================

/// Subdirectory of the data directory holding banner inputs/outputs.
pub const RESOURCES_DIR_NAME: &str = "resources";

/// One quote per line.
pub const QUOTES_FILE_NAME: &str = "quotes.txt";

/// Free-text note shown verbatim.
pub const NOTE_FILE_NAME: &str = "note.txt";

/// Last generated style prompt (overwritten each time).
pub const STYLE_FILE_NAME: &str = "style.txt";

/// Banner text when `quotes.txt` is missing or has no usable lines.
pub const NO_QUOTES_MESSAGE: &str = "No quotes available.";

/// Banner text when `note.txt` is missing or unreadable.
pub const NO_NOTE_MESSAGE: &str = "No note available.";

// =============================================================================
// UI defaults
// =============================================================================

/// Default input font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Minimum user-selectable input font size (points).
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum user-selectable input font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Minimum window size in logical pixels.
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

/// Initial window size in logical pixels.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [760.0, 560.0];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
