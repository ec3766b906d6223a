// BashOut - app/mod.rs
//
// Application layer: manuscript lifecycle and configuration record.
// Dependencies: core layer, platform::fs.
// Must NOT depend on: ui.

pub mod record;
pub mod state;
