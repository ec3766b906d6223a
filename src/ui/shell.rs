// BashOut - ui/shell.rs
//
// Presentation state: input buffer, banner, theme, font size, open dialog
// and queued warnings. Kept apart from `AppState` so the manuscript
// lifecycle never depends on widgets.

use crate::app::state::AppState;
use crate::core::banner::{self, BannerStyle};
use crate::platform::config::AppConfig;
use crate::util::constants::{DEFAULT_MANUSCRIPT_NAME, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::util::error::{BashOutError, ManuscriptError};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Modal dialog currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    FirstRun,
    NewManuscript,
    Rename,
}

#[derive(Debug)]
pub struct ShellState {
    /// Unsent text in the composer.
    pub input: String,
    pub banner_style: BannerStyle,
    pub banner_text: String,
    pub dark_mode: bool,
    pub font_size: f32,
    pub dialog: Option<Dialog>,
    /// Text field inside the new/rename dialogs.
    pub dialog_input: String,
    /// Submit the composer text once a manuscript exists.
    pub pending_submit: bool,
    /// Warnings waiting to be acknowledged, oldest first.
    pub warnings: VecDeque<String>,
    resources_dir: PathBuf,
}

impl ShellState {
    pub fn new(config: &AppConfig, resources_dir: PathBuf) -> Self {
        let mut shell = Self {
            input: String::new(),
            banner_style: BannerStyle::default(),
            banner_text: String::new(),
            dark_mode: config.dark_mode,
            font_size: config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            dialog: None,
            dialog_input: String::new(),
            pending_submit: false,
            warnings: VecDeque::new(),
            resources_dir,
        };
        shell.refresh_banner();
        shell
    }

    pub fn refresh_banner(&mut self) {
        self.banner_text = banner::banner_text(
            self.banner_style,
            &self.resources_dir,
            &mut rand::thread_rng(),
        );
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.warnings.push_back(message.into());
    }

    pub fn open_new_manuscript(&mut self) {
        self.dialog_input = DEFAULT_MANUSCRIPT_NAME.to_string();
        self.dialog = Some(Dialog::NewManuscript);
    }

    /// Rename is only offered while a manuscript is active.
    pub fn open_rename(&mut self, state: &AppState) {
        if let Some(active) = state.active() {
            self.dialog_input = active.name.clone();
            self.dialog = Some(Dialog::Rename);
        }
    }

    /// Ask for a new save directory and switch to it.
    pub fn choose_save_dir(&mut self, state: &mut AppState) {
        let picked = rfd::FileDialog::new()
            .set_title("Choose Save Location")
            .set_directory(state.save_dir())
            .pick_folder();
        if let Some(dir) = picked {
            if let Err(e) = state.switch_save_dir(dir) {
                self.show_warning(e.user_message());
            }
        }
    }

    /// Send the composer text to the active manuscript.
    ///
    /// The text is cleared only after it is on disk. Without a manuscript the
    /// new-manuscript dialog opens and the text is sent once one exists.
    pub fn submit_input(&mut self, state: &mut AppState) {
        match state.submit(&self.input) {
            Ok(Some(_)) => self.input.clear(),
            Ok(None) => {}
            Err(BashOutError::Manuscript(ManuscriptError::NoActiveManuscript)) => {
                self.pending_submit = true;
                self.open_new_manuscript();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sentence not saved");
                self.show_warning(format!(
                    "Your sentence was not saved and is still in the input box.\n\n{}",
                    e.user_message()
                ));
            }
        }
    }

    /// Confirm the new-manuscript dialog.
    pub fn confirm_new_manuscript(&mut self, state: &mut AppState) {
        match state.create(&self.dialog_input) {
            Ok(()) => {
                self.dialog = None;
                if std::mem::take(&mut self.pending_submit) {
                    self.submit_input(state);
                }
            }
            Err(e) => self.show_warning(e.user_message()),
        }
    }

    /// Confirm the rename dialog. Collisions keep the dialog open.
    pub fn confirm_rename(&mut self, state: &mut AppState) {
        match state.rename(&self.dialog_input) {
            Ok(_) => self.dialog = None,
            Err(e) => self.show_warning(e.user_message()),
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
        self.pending_submit = false;
    }
}
