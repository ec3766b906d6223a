// BashOut - ui/panels/mod.rs

pub mod composer;
pub mod dialogs;
pub mod header;
