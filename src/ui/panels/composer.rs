// BashOut - ui/panels/composer.rs
//
// Controls row (last sentence caption, word count, banner style), last
// sentence, the input box, and the font/theme controls.
//
// Enter submits; Shift+Enter inserts a newline.

use crate::app::state::AppState;
use crate::core::banner::BannerStyle;
use crate::ui::shell::ShellState;
use crate::ui::theme;
use crate::util::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use egui::RichText;

const INPUT_HINT: &str = "Type your text here. Press Enter to add to saved file.\n\
                          Ctrl+N: New manuscript | Ctrl+R: Rename manuscript";

pub fn render(ui: &mut egui::Ui, state: &mut AppState, shell: &mut ShellState) {
    controls_row(ui, state, shell);

    let last = state.active().map(|a| a.last_line.as_str()).unwrap_or("");
    ui.add(egui::Label::new(RichText::new(last).size(theme::LAST_SENTENCE_SIZE)).wrap());
    ui.add_space(8.0);

    input_box(ui, state, shell);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Font Size:");
        ui.add(egui::DragValue::new(&mut shell.font_size).range(MIN_FONT_SIZE..=MAX_FONT_SIZE));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if shell.dark_mode { "Light Mode" } else { "Dark Mode" };
            if ui.button(label).clicked() {
                shell.dark_mode = !shell.dark_mode;
            }
        });
    });
}

fn controls_row(ui: &mut egui::Ui, state: &AppState, shell: &mut ShellState) {
    ui.columns(3, |cols| {
        cols[0].label(RichText::new("Last Sentence:").size(theme::CONTROL_SIZE).strong());

        cols[1].vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Words: {}", state.word_count_label()))
                    .size(theme::CONTROL_SIZE),
            );
        });

        cols[2].with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let before = shell.banner_style;
            egui::ComboBox::from_id_salt("banner_style")
                .selected_text(shell.banner_style.label())
                .show_ui(ui, |ui| {
                    for style in BannerStyle::ALL {
                        ui.selectable_value(&mut shell.banner_style, style, style.label());
                    }
                });
            ui.label(RichText::new("Banner Style:").size(theme::CONTROL_SIZE));
            if shell.banner_style != before {
                shell.refresh_banner();
            }
        });
    });
}

fn input_box(ui: &mut egui::Ui, state: &mut AppState, shell: &mut ShellState) {
    let input_id = egui::Id::new("composer_input");
    let focused = ui.memory(|m| m.has_focus(input_id));

    // Take the Enter press before the text edit sees it, so it never becomes
    // a newline in the buffer.
    let submit = focused
        && shell.dialog.is_none()
        && ui.input(|i| i.modifiers.is_none())
        && ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Enter));

    let response = ui.add(
        egui::TextEdit::multiline(&mut shell.input)
            .id(input_id)
            .hint_text(INPUT_HINT)
            .font(egui::FontId::proportional(shell.font_size))
            .desired_rows(theme::INPUT_ROWS)
            .desired_width(f32::INFINITY),
    );

    if submit {
        shell.submit_input(state);
        response.request_focus();
    }
}
