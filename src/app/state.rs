// BashOut - app/state.rs
//
// Application state and manuscript lifecycle. Owns the configuration
// record, the active manuscript and its word tally. Presentation state
// (input text, banner, theme, dialogs) lives in the GUI, not here.
//
// Lifecycle: NoManuscript -> Active (create); Active -> Active (create,
// rename). Switching the save directory is legal in either state.

use crate::app::record::{self, ConfigRecord};
use crate::core::manuscript::{self, AppendReceipt, RenameOutcome};
use crate::core::words::{WordCount, WordTally};
use crate::util::error::{ManuscriptError, Result};
use std::path::{Path, PathBuf};

/// Which lifecycle state the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    NoManuscript,
    Active,
}

/// The manuscript currently receiving sentences.
#[derive(Debug, Clone)]
pub struct ActiveManuscript {
    /// Validated manuscript name.
    pub name: String,
    /// Directory the backing file lives in. Fixed at activation; a later
    /// save-directory switch does not move it.
    pub dir: PathBuf,
    /// Session/lifetime counts.
    pub tally: WordTally,
    /// Most recent non-empty line, for display.
    pub last_line: String,
}

impl ActiveManuscript {
    pub fn path(&self) -> PathBuf {
        manuscript::manuscript_path(&self.dir, &self.name)
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    record: ConfigRecord,
    record_path: PathBuf,
    active: Option<ActiveManuscript>,

    /// No usable record existed at startup; the shell should offer setup.
    pub first_run: bool,

    /// Status message for the status line.
    pub status_message: String,

    /// Non-fatal warnings waiting to be shown to the user.
    pub warnings: Vec<String>,
}

impl AppState {
    /// Load the record at `record_path` and reopen its manuscript, if any.
    ///
    /// Never fails: unusable records fall back to defaults rooted at
    /// `default_save_dir`, and a manuscript that cannot be opened leaves the
    /// app in `NoManuscript` with a warning.
    pub fn open(record_path: PathBuf, default_save_dir: &Path) -> Self {
        let loaded = record::load_or_default(&record_path, default_save_dir);
        let mut state = Self {
            record: loaded.record,
            record_path,
            active: None,
            first_run: loaded.first_run,
            status_message: "Ready.".to_string(),
            warnings: loaded.warning.into_iter().collect(),
        };

        if let Some(name) = state.record.current_manuscript.clone() {
            match state.activate(&name) {
                Ok(active) => {
                    state.status_message = format!("Opened '{}'.", active.name);
                    state.active = Some(active);
                }
                Err(e) => {
                    tracing::warn!(manuscript = %name, error = %e, "Could not reopen manuscript");
                    state.warnings.push(format!("Could not reopen '{name}': {e}"));
                }
            }
        }
        state
    }

    /// Ensure the backing file exists and build fresh counts from it.
    fn activate(&self, name: &str) -> std::result::Result<ActiveManuscript, ManuscriptError> {
        let name = manuscript::validate_name(name)?.to_string();
        let dir = self.record.save_dir.clone();
        let path = manuscript::ensure(&name, &dir)?;

        let (tally, count) = WordTally::load(&path);
        if !count.is_available() {
            tracing::warn!(path = %path.display(), "Starting word count unavailable; using 0");
        }
        let last_line = manuscript::last_line(&name, &dir);

        tracing::info!(
            manuscript = %name,
            dir = %dir.display(),
            words = tally.total(),
            "Manuscript activated"
        );
        Ok(ActiveManuscript {
            name,
            dir,
            tally,
            last_line,
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.active.is_some() {
            Lifecycle::Active
        } else {
            Lifecycle::NoManuscript
        }
    }

    pub fn active(&self) -> Option<&ActiveManuscript> {
        self.active.as_ref()
    }

    /// Directory future manuscripts are created in.
    pub fn save_dir(&self) -> &Path {
        &self.record.save_dir
    }

    /// `[session/total]`, or `[0/0]` without an active manuscript.
    pub fn word_count_label(&self) -> String {
        self.active
            .as_ref()
            .map(|a| a.tally.label())
            .unwrap_or_else(|| WordTally::default().label())
    }

    /// Create (or reopen) manuscript `name` in the save directory and make it
    /// active. Counting restarts from the file's current content.
    pub fn create(&mut self, name: &str) -> Result<()> {
        let active = self.activate(name)?;
        self.status_message = format!("Writing to '{}'.", active.name);
        self.record.current_manuscript = Some(active.name.clone());
        self.active = Some(active);
        self.first_run = false;
        self.persist();
        Ok(())
    }

    /// Rename the active manuscript. The pointer moves only after the file
    /// rename succeeds.
    pub fn rename(&mut self, new_name: &str) -> Result<RenameOutcome> {
        let active = self
            .active
            .as_mut()
            .ok_or(ManuscriptError::NoActiveManuscript)?;

        let outcome = manuscript::rename(&active.name, new_name, &active.dir)?;
        if let RenameOutcome::Renamed(_) = outcome {
            let old = std::mem::replace(&mut active.name, new_name.trim().to_string());
            self.status_message = format!("Renamed '{old}' to '{}'.", active.name);
            self.record.current_manuscript = Some(active.name.clone());
            self.persist();
        }
        Ok(outcome)
    }

    /// Point future `create` calls at `dir`, creating it if needed.
    ///
    /// Existing manuscript files stay where they are; the active manuscript
    /// keeps appending to its own file.
    pub fn switch_save_dir(&mut self, dir: PathBuf) -> Result<()> {
        std::fs::create_dir_all(&dir).map_err(|source| ManuscriptError::Io {
            path: dir.clone(),
            operation: "create directory",
            source,
        })?;
        tracing::info!(dir = %dir.display(), "Save directory changed");
        self.status_message = match &self.active {
            Some(active) if active.dir != dir => format!(
                "Saving new manuscripts to '{}'. '{}' stays in '{}' until you create a new manuscript.",
                dir.display(),
                active.name,
                active.dir.display()
            ),
            _ => format!("Saving new manuscripts to '{}'.", dir.display()),
        };
        self.record.save_dir = dir;
        self.persist();
        Ok(())
    }

    /// Append a confirmed sentence to the active manuscript.
    ///
    /// Whitespace-only input is ignored (`Ok(None)`). The lifetime total is
    /// recounted from the file afterwards; if that read fails the appended
    /// words are added to the previous total instead. On error nothing in
    /// memory changes, so the caller can keep the unsent text.
    pub fn submit(&mut self, text: &str) -> Result<Option<AppendReceipt>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let active = self
            .active
            .as_mut()
            .ok_or(ManuscriptError::NoActiveManuscript)?;

        let receipt = manuscript::append(&active.name, &active.dir, text)?;
        // The total follows the file, so edits made outside the app since
        // the last append are picked up here too.
        if !active.tally.rescan(&receipt.path).is_available() {
            active.tally.record_append(receipt.words_added);
        }
        if let Some(line) = text.lines().map(str::trim).rfind(|l| !l.is_empty()) {
            active.last_line = line.to_string();
        }
        self.status_message = format!(
            "Saved {} word(s) to '{}'.",
            receipt.words_added, active.name
        );
        Ok(Some(receipt))
    }

    /// Re-read the active manuscript to pick up edits made outside the app.
    pub fn recount(&mut self) -> Option<WordCount> {
        let active = self.active.as_mut()?;
        let path = active.path();
        let count = active.tally.rescan(&path);
        active.last_line = manuscript::last_line(&active.name, &active.dir);
        if !count.is_available() {
            self.warnings
                .push(format!("Could not recount words in '{}'.", active.name));
        }
        Some(count)
    }

    /// Drain pending warnings for display.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Save the record; failure is a warning, not an error, because the
    /// manuscript operation that triggered it already succeeded on disk.
    fn persist(&mut self) {
        if let Err(e) = record::save(&self.record, &self.record_path) {
            tracing::warn!(error = %e, "Could not save configuration record");
            self.warnings
                .push(format!("Settings could not be saved: {e}"));
        }
    }
}
