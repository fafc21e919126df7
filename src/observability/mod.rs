//! File-backed logging for the plugin.
//!
//! Zellij plugins own their pane's stdout, so log lines cannot go to the
//! terminal. This module installs a `tracing-subscriber` pipeline writing
//! plain-text events to `~/.local/share/zellij/foodboard/foodboard.log`
//! (via the sandbox `/host` mount), filtered by the configured trace level.
//!
//! # Usage
//!
//! Initialize tracing early in the plugin lifecycle:
//!
//! ```
//! use foodboard::observability::init_tracing;
//! use foodboard::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```

mod init;

pub use init::init_tracing;
