// BashOut - core/mod.rs
//
// Core logic: manuscript files, word counting, banner sources.
// Must NOT depend on: ui, platform, app.

pub mod banner;
pub mod manuscript;
pub mod words;
