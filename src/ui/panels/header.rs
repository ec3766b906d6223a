// BashOut - ui/panels/header.rs
//
// Title (the manuscript name, doubling as the manuscript menu) and banner.

use crate::app::state::{AppState, Lifecycle};
use crate::ui::shell::ShellState;
use crate::ui::theme;
use crate::util::constants::APP_NAME;
use egui::RichText;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, shell: &mut ShellState) {
    let title = state
        .active()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| APP_NAME.to_string());
    let has_manuscript = state.lifecycle() == Lifecycle::Active;

    ui.vertical_centered(|ui| {
        ui.menu_button(RichText::new(title).size(theme::TITLE_SIZE), |ui| {
            if ui.button("New Manuscript (Ctrl+N)").clicked() {
                shell.open_new_manuscript();
                ui.close_menu();
            }
            ui.add_enabled_ui(has_manuscript, |ui| {
                if ui.button("Rename Manuscript (Ctrl+R)").clicked() {
                    shell.open_rename(state);
                    ui.close_menu();
                }
                if ui.button("Recount Words").clicked() {
                    state.recount();
                    ui.close_menu();
                }
            });
            ui.separator();
            if ui.button("Change Save Location\u{2026}").clicked() {
                ui.close_menu();
                shell.choose_save_dir(state);
            }
        });

        ui.add_space(6.0);
        ui.label(
            RichText::new(&shell.banner_text)
                .size(theme::BANNER_SIZE)
                .color(theme::palette(shell.dark_mode).banner),
        );
    });
}
