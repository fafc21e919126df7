//! Foodboard: a Zellij plugin rendering a searchable, paginated food table.
//!
//! Foodboard is a terminal multiplexer plugin that displays a static list of
//! food records (name, mention count, upvote count) with:
//! - Case-insensitive substring search over food names
//! - Fixed-page-size pagination with a three-indicator page window
//! - Two table styles: compact, and fixed-height with placeholder rows and
//!   an exact-match advisory
//! - TOML-based theming with built-in Catppuccin variants
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!            │                         │
//! ┌───────────────────┐     ┌───────────────────┐
//! │ UI Layer (ui/)    │     │ Domain (domain/)  │
//! │ - Rendering       │     │ - Food records    │
//! │ - Theming         │     │ - Filter/paginate │
//! │ - Components      │     │ - Error types     │
//! └───────────────────┘     └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - File-backed tracing (observability/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! All state is in-memory and owned by a single [`app::AppState`]; every
//! transition is a synchronous recomputation triggered by a keystroke. There
//! are no workers, no persistence, and no failable operations outside the
//! configuration edges.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/foodboard.wasm" {
//!         page_size "10"
//!         table_style "fixed"
//!         food_file "~/foods.json"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use foodboard::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::PageNext)?;
//! assert!(should_render);
//! # Ok::<(), foodboard::FoodboardError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, TableStyle};
pub use domain::{FoodRecord, FoodboardError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default number of records per page.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of records per page. Default: 10
    pub page_size: usize,

    /// Table body layout style. Default: fixed-height with placeholder rows.
    pub table_style: TableStyle,

    /// Optional path to a JSON file with a custom record list.
    ///
    /// When unset, or when loading fails, the built-in 25-record sample list
    /// is used. Tilde paths are resolved through the sandbox `/host` mount.
    pub food_file: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            table_style: TableStyle::default(),
            food_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: String → `usize` (falls back to 10 on parse error or 0)
    /// - `table_style`: `"compact"` or `"fixed"` (falls back to fixed)
    /// - `food_file`, `theme`, `theme_file`, `trace_level`: passed through
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use foodboard::{Config, TableStyle};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "5".to_string());
    /// map.insert("table_style".to_string(), "compact".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 5);
    /// assert_eq!(config.table_style, TableStyle::Compact);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let page_size = config
            .get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let table_style = config
            .get("table_style")
            .and_then(|s| TableStyle::from_name(s))
            .unwrap_or_default();

        Self {
            page_size,
            table_style,
            food_file: config.get("food_file").cloned(),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - The configured theme (from file, name, or default)
/// - The configured record list (from `food_file`, or the built-in sample)
/// - The configured page size and table style
///
/// Configuration failures never abort the pane: a broken theme or food file
/// logs a warning and falls back to the built-in default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing foodboard plugin");

    let theme = load_theme(config);
    let foods = load_food_list(config);

    let mut state = AppState::new(foods, theme);
    state.page_size = config.page_size;
    state.table_style = config.table_style;
    state
}

/// Resolves the theme from configuration, falling back to the default.
fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    if let Some(theme_name) = &config.theme_name {
        return Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme name, using default");
            Theme::default()
        });
    }

    Theme::default()
}

/// Resolves the record list from configuration, falling back to the sample.
fn load_food_list(config: &Config) -> Vec<FoodRecord> {
    let Some(food_file) = &config.food_file else {
        return domain::sample_foods();
    };

    let path = infrastructure::expand_tilde(food_file);
    match domain::load_foods(&path) {
        Ok(foods) => {
            tracing::debug!(food_file = %food_file, record_count = foods.len(), "loaded custom food list");
            foods
        }
        Err(e) => {
            tracing::warn!(food_file = %food_file, error = %e, "failed to load food list, using sample data");
            domain::sample_foods()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.table_style, TableStyle::FixedHeight);
        assert!(config.food_file.is_none());
    }

    #[test]
    fn from_zellij_parses_typed_values_with_fallbacks() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "7".to_string());
        map.insert("table_style".to_string(), "compact".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.page_size, 7);
        assert_eq!(config.table_style, TableStyle::Compact);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));

        let mut bad = BTreeMap::new();
        bad.insert("page_size".to_string(), "zero".to_string());
        bad.insert("table_style".to_string(), "spacious".to_string());
        let config = Config::from_zellij(&bad);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.table_style, TableStyle::FixedHeight);
    }

    #[test]
    fn page_size_of_zero_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "0".to_string());
        assert_eq!(Config::from_zellij(&map).page_size, 10);
    }

    #[test]
    fn initialize_uses_sample_data_by_default() {
        let state = initialize(&Config::default());
        assert_eq!(state.foods.len(), 25);
        assert_eq!(state.page_size, 10);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn initialize_loads_configured_food_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Ramen","mentions":9,"upvotes":101}}]"#
        )
        .unwrap();

        let config = Config {
            food_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.foods.len(), 1);
        assert_eq!(state.foods[0].name, "Ramen");
    }

    #[test]
    fn initialize_falls_back_on_broken_food_file() {
        let config = Config {
            food_file: Some("/nonexistent/foods.json".to_string()),
            ..Default::default()
        };

        let state = initialize(&config);
        assert_eq!(state.foods.len(), 25);
    }
}
