//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with a file-backed fmt layer, wiring the
//! `tracing` macros used throughout the plugin to a log file in the plugin
//! data directory.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Log file name within the plugin data directory.
const LOG_FILE: &str = "foodboard.log";

/// Initializes the tracing subscriber with file-backed output.
///
/// Sets up a subscriber pipeline that filters events by the configured trace
/// level and writes plain-text lines (no ANSI, the pane owns the terminal) to
/// `foodboard.log` in the plugin data directory.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (any `EnvFilter` directive)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(log_file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
