// BashOut - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::{BaseDirs, ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

/// Resolved platform paths for BashOut configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Holds `state.json` and `config.toml`
    /// (e.g. ~/.config/bashout/ or %APPDATA%\BashOut\config\).
    pub config_dir: PathBuf,

    /// Data directory.
    pub data_dir: PathBuf,

    /// Banner resources (quotes, note, generated style prompt).
    pub resources_dir: PathBuf,

    /// Where manuscripts are saved until the user picks another directory
    /// (e.g. ~/Documents/BashOut).
    pub default_save_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        let default_save_dir = default_save_dir();
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();
            let resources_dir = data_dir.join(constants::RESOURCES_DIR_NAME);

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                save = %default_save_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
                resources_dir,
                default_save_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                resources_dir: fallback.join(constants::RESOURCES_DIR_NAME),
                data_dir: fallback,
                default_save_dir,
            }
        }
    }

    /// Replace the config directory (CLI `--config-dir`).
    pub fn with_config_dir(mut self, config_dir: PathBuf) -> Self {
        self.config_dir = config_dir;
        self
    }

    /// Path of the persisted configuration record.
    pub fn state_file(&self) -> PathBuf {
        self.config_dir.join(constants::STATE_FILE_NAME)
    }

    /// Path of the optional preferences file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

/// `<documents>/BashOut`, falling back to `~/Documents/BashOut`, then `./BashOut`.
fn default_save_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|u| u.document_dir().map(Path::to_path_buf))
        .or_else(|| BaseDirs::new().map(|b| b.home_dir().join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::DEFAULT_SAVE_DIR_NAME)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let home = || BaseDirs::new().map(|b| b.home_dir().to_path_buf());
    if raw == "~" {
        if let Some(h) = home() {
            return h;
        }
    } else if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        if let Some(h) = home() {
            return h.join(rest);
        }
    }
    PathBuf::from(raw)
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still loads.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[manuscripts]` section.
    pub manuscripts: ManuscriptsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "light" or "dark".
    pub theme: Option<String>,
    /// Input font size in points.
    pub font_size: Option<f32>,
}

/// `[manuscripts]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ManuscriptsSection {
    /// Save directory used on first run.
    pub save_dir: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated preferences derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Input font size in points.
    pub font_size: f32,
    /// Overrides the platform default save directory.
    pub save_dir: Option<PathBuf>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: constants::DEFAULT_FONT_SIZE,
            save_dir: None,
            log_level: None,
        }
    }
}

fn read_raw_config(config_path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        operation: "read",
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Load and validate the preferences file at `config_path`.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file yields defaults with no warnings; an unreadable or unparseable file
/// yields defaults with a warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Preferences unusable; using defaults");
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"light\" or \"dark\". Using default (light).",
            )),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- Manuscripts: save_dir --
    if let Some(ref dir) = raw.manuscripts.save_dir {
        let dir = dir.trim();
        if !dir.is_empty() {
            config.save_dir = Some(expand_home(dir));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = PlatformPaths::resolve()
            .with_config_dir(dir.path().to_path_buf())
            .config_file();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_config_uses_defaults_silently() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join(constants::CONFIG_FILE_NAME));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[ui]
theme = "Dark"
font_size = 18

[manuscripts]
save_dir = "/srv/writing"

[logging]
level = "DEBUG"

[unknown]
ignored = true
"#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(config.dark_mode);
        assert_eq!(config.font_size, 18.0);
        assert_eq!(config.save_dir, Some(PathBuf::from("/srv/writing")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[ui]\ntheme = \"sepia\"\nfont_size = 72\n[logging]\nlevel = \"loud\"\n",
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unparseable_config_warns() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[ui\ntheme = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config parse error"), "got {warnings:?}");
        assert!(warnings[0].contains("config.toml"));
    }

    #[test]
    fn test_unreadable_config_warns() {
        let dir = TempDir::new().unwrap();
        // A directory in place of the file exists but cannot be read.
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::create_dir(&path).unwrap();
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config I/O error during read"), "got {warnings:?}");
    }

    #[test]
    fn test_expand_home_leaves_plain_paths_alone() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("relative"), PathBuf::from("relative"));
        if let Some(base) = BaseDirs::new() {
            assert_eq!(expand_home("~/Novels"), base.home_dir().join("Novels"));
        }
    }

    #[test]
    fn test_config_dir_override_moves_state_and_config_files() {
        let paths = PlatformPaths::resolve().with_config_dir(PathBuf::from("/tmp/alt"));
        assert_eq!(paths.state_file(), PathBuf::from("/tmp/alt/state.json"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/alt/config.toml"));
    }
}
