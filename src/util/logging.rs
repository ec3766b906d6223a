// BashOut - util/logging.rs
//
// Subscriber setup. BashOut's own events are shown at the selected level
// while GUI and windowing crates stay at `warn`, so a debug session shows
// manuscript activity rather than per-frame egui and winit chatter.
//
// Sentence text is never logged, only sizes and counts.

use crate::util::constants::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Filter directive showing BashOut events at `level` and everything else
/// at `warn`.
pub fn directive(level: &str) -> String {
    format!("warn,{}={level}", env!("CARGO_PKG_NAME"))
}

/// Level chosen from the CLI flag and `[logging] level`, ignoring `RUST_LOG`.
pub fn selected_level(debug_flag: bool, config_level: Option<&str>) -> &str {
    if debug_flag {
        "debug"
    } else {
        config_level.unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// Install the global subscriber on stderr.
///
/// A valid `RUST_LOG` overrides everything; otherwise `--debug`, then the
/// config level, then `info`, each applied to BashOut's targets only.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let level = selected_level(debug_flag, config_level);
    let (filter, source) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, "RUST_LOG"),
        Err(_) => (EnvFilter::new(directive(level)), "settings"),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    match installed {
        Ok(()) => tracing::debug!(log_level = level, source, "Logging ready"),
        Err(e) => eprintln!("BashOut: logging unavailable: {e}"),
    }
}
