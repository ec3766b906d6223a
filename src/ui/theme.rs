// BashOut - ui/theme.rs
//
// Light/dark palettes, text sizes, and visuals setup.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window: Color32,
    pub text: Color32,
    pub banner: Color32,
    pub input_bg: Color32,
    pub button_bg: Color32,
}

pub const LIGHT: Palette = Palette {
    window: Color32::from_rgb(0xff, 0xff, 0xff),
    text: Color32::from_rgb(0x00, 0x00, 0x00),
    banner: Color32::from_rgb(0x1a, 0x73, 0xe8),
    input_bg: Color32::from_rgb(0xff, 0xff, 0xff),
    button_bg: Color32::from_rgb(0xf0, 0xf0, 0xf0),
};

pub const DARK: Palette = Palette {
    window: Color32::from_rgb(0x2d, 0x2d, 0x2d),
    text: Color32::from_rgb(0xff, 0xff, 0xff),
    banner: Color32::from_rgb(0x8a, 0xb4, 0xf8),
    input_bg: Color32::from_rgb(0x3d, 0x3d, 0x3d),
    button_bg: Color32::from_rgb(0x3d, 0x3d, 0x3d),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

/// Text sizes in points.
pub const TITLE_SIZE: f32 = 28.0;
pub const BANNER_SIZE: f32 = 15.0;
pub const LAST_SENTENCE_SIZE: f32 = 14.0;
pub const CONTROL_SIZE: f32 = 13.0;

/// Layout constants.
pub const PANEL_MARGIN: i8 = 20;
pub const INPUT_ROWS: usize = 8;

/// Install the visuals for the chosen theme.
pub fn apply(ctx: &egui::Context, dark_mode: bool) {
    let p = palette(dark_mode);
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = p.window;
    visuals.window_fill = p.window;
    visuals.extreme_bg_color = p.input_bg;
    visuals.override_text_color = Some(p.text);
    visuals.widgets.inactive.weak_bg_fill = p.button_bg;
    visuals.widgets.inactive.bg_fill = p.button_bg;
    ctx.set_visuals(visuals);
    tracing::debug!(dark = dark_mode, "Theme applied");
}
