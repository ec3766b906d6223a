// BashOut - ui/panels/dialogs.rs
//
// First-run, new-manuscript and rename dialogs, plus the warning queue.
// Warnings are drawn on top of any other dialog.

use crate::app::state::AppState;
use crate::ui::shell::{Dialog, ShellState};
use crate::util::constants::APP_NAME;

pub fn render(ctx: &egui::Context, state: &mut AppState, shell: &mut ShellState) {
    match shell.dialog {
        Some(Dialog::FirstRun) => first_run(ctx, state, shell),
        Some(Dialog::NewManuscript) => name_prompt(
            ctx,
            "New Manuscript",
            "Enter a name for your manuscript:",
            state,
            shell,
            ShellState::confirm_new_manuscript,
        ),
        Some(Dialog::Rename) => name_prompt(
            ctx,
            "Rename Manuscript",
            "Enter new name:",
            state,
            shell,
            ShellState::confirm_rename,
        ),
        None => {}
    }
    warning(ctx, shell);
}

fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

fn first_run(ctx: &egui::Context, state: &mut AppState, shell: &mut ShellState) {
    modal("First Run Setup").show(ctx, |ui| {
        ui.heading(format!("Welcome to {APP_NAME}!"));
        ui.label("Would you like to choose where to save your manuscripts?");
        ui.label(format!("Current location: {}", state.save_dir().display()));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                shell.choose_save_dir(state);
                shell.open_new_manuscript();
            }
            if ui.button("No").clicked() {
                shell.open_new_manuscript();
            }
        });
    });
}

fn name_prompt(
    ctx: &egui::Context,
    title: &str,
    prompt: &str,
    state: &mut AppState,
    shell: &mut ShellState,
    confirm: fn(&mut ShellState, &mut AppState),
) {
    let blocked = !shell.warnings.is_empty();
    modal(title).show(ctx, |ui| {
        ui.label(prompt);
        let response = ui.text_edit_singleline(&mut shell.dialog_input);
        if !blocked && !response.has_focus() && !response.lost_focus() {
            response.request_focus();
        }
        let entered =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let ok = ui.button("OK").clicked();
            if ui.button("Cancel").clicked() {
                shell.cancel_dialog();
            } else if (ok || entered) && !blocked {
                confirm(shell, state);
            }
        });
    });
}

fn warning(ctx: &egui::Context, shell: &mut ShellState) {
    let Some(message) = shell.warnings.front().cloned() else {
        return;
    };
    modal("Warning").order(egui::Order::Foreground).show(ctx, |ui| {
        ui.label(message);
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            shell.warnings.pop_front();
        }
    });
}
