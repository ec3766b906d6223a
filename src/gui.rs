// BashOut - gui.rs
//
// Top-level eframe::App implementation.
// Wires the panels together and routes keyboard shortcuts.

use crate::app::state::AppState;
use crate::ui;
use crate::ui::shell::{Dialog, ShellState};

/// The BashOut application.
pub struct BashOutApp {
    pub state: AppState,
    pub shell: ShellState,
    /// Theme currently installed in the egui context.
    applied_dark_mode: Option<bool>,
}

impl BashOutApp {
    pub fn new(state: AppState, mut shell: ShellState) -> Self {
        if state.first_run {
            shell.dialog = Some(Dialog::FirstRun);
        }
        Self {
            state,
            shell,
            applied_dark_mode: None,
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.shell.dialog.is_some() || !self.shell.warnings.is_empty() {
            return;
        }
        let new = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::N);
        let rename = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
        if ctx.input_mut(|i| i.consume_shortcut(&new)) {
            self.shell.open_new_manuscript();
        } else if ctx.input_mut(|i| i.consume_shortcut(&rename)) {
            self.shell.open_rename(&self.state);
        }
    }
}

impl eframe::App for BashOutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_dark_mode != Some(self.shell.dark_mode) {
            ui::theme::apply(ctx, self.shell.dark_mode);
            self.applied_dark_mode = Some(self.shell.dark_mode);
        }

        for warning in self.state.take_warnings() {
            self.shell.show_warning(warning);
        }

        self.handle_shortcuts(ctx);

        let margin = egui::Margin::same(ui::theme::PANEL_MARGIN);
        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(margin);

        egui::TopBottomPanel::top("header")
            .frame(frame)
            .show(ctx, |ui| {
                ui::panels::header::render(ui, &mut self.state, &mut self.shell);
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.state.save_dir().display().to_string());
                });
            });
        });

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui::panels::composer::render(ui, &mut self.state, &mut self.shell);
        });

        ui::panels::dialogs::render(ctx, &mut self.state, &mut self.shell);
    }
}
