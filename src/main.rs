// BashOut - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Preferences loading and logging initialisation
// 3. Configuration record + manuscript restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use bashout::app;
pub use bashout::core;
pub use bashout::platform;
pub use bashout::ui;
pub use bashout::util;

use clap::Parser;
use std::path::PathBuf;

/// BashOut - write one sentence at a time.
///
/// Every sentence you confirm is appended to a plain-text manuscript and
/// counted toward this session's and the manuscript's word totals.
#[derive(Parser, Debug)]
#[command(name = "BashOut", version, about)]
struct Cli {
    /// Directory holding state.json and config.toml (defaults to the
    /// platform config directory).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut paths = platform::config::PlatformPaths::resolve();
    if let Some(dir) = cli.config_dir {
        paths = paths.with_config_dir(dir);
    }

    // Preferences are read before logging so [logging] level can apply.
    let (config, config_warnings) = platform::config::load_config(&paths.config_file());
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %paths.config_dir.display(),
        "BashOut starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    let default_save_dir = config
        .save_dir
        .clone()
        .unwrap_or_else(|| paths.default_save_dir.clone());
    let mut state = app::state::AppState::open(paths.state_file(), &default_save_dir);
    state.warnings.extend(config_warnings);

    let shell = ui::shell::ShellState::new(&config, paths.resources_dir.clone());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::BashOutApp::new(state, shell)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch BashOut GUI: {e}");
        std::process::exit(1);
    }
}
