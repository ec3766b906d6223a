// BashOut - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (banner), egui.

pub mod panels;
pub mod shell;
pub mod theme;
