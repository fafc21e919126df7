//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Foodboard
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Translate key events to library events, delegate to
//!    `handle_event`, execute resulting actions
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Next page
//! - `Ctrl+p`: Previous page
//!
//! In normal mode:
//! - `l`/`Right`: Next page
//! - `h`/`Left`: Previous page
//! - `1`-`9`: Jump to page
//! - `/`: Enter search mode
//! - `Esc`: Clear search query
//! - `q`: Close plugin
//!
//! In search mode (typing):
//! - Characters/Backspace: Edit the query
//! - `Enter`: Switch to navigating focus
//! - `Left`/`Right`: Page without leaving search
//! - `Esc`: Exit search
//!
//! In search mode (navigating):
//! - `h`/`l`/arrows: Page
//! - `1`-`9`: Jump to page
//! - `/`: Return to the search input
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use foodboard::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific concern of
/// re-initializing once filesystem permission arrives.
struct State {
    /// Core application state from the library layer.
    app: foodboard::app::AppState,

    /// Parsed plugin configuration, kept for permission-gated re-initialization.
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: foodboard::initialize(&default_config),
            config: default_config,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing and application state,
    /// requests filesystem permission when configured files need it, and
    /// subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        foodboard::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "plugin loading started");
        self.app = foodboard::initialize(&config);
        self.config = config;
        tracing::debug!("app state initialized");

        if self.config.food_file.is_some() || self.config.theme_file.is_some() {
            tracing::debug!("requesting filesystem permission for configured files");
            request_permission(&[PermissionType::FullHdAccess]);
        }

        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij key events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        foodboard::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events based on the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::PageNext);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::PagePrev);
        }

        let typing = matches!(
            self.app.input_mode,
            InputMode::Search(SearchFocus::Typing)
        );

        Some(match key.bare_key {
            BareKey::Left => Event::PagePrev,
            BareKey::Right => Event::PageNext,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Enter if typing => Event::FocusResults,
            BareKey::Backspace if typing => Event::Backspace,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char(c) if typing => Event::Char(c),
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('h') => Event::PagePrev,
            BareKey::Char('l') => Event::PageNext,
            BareKey::Char(c @ '1'..='9') => {
                let page = c.to_digit(10).map(|d| d as usize)?;
                Event::PageJump(page)
            }
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// Once filesystem permission is granted, the configured food and theme
    /// files become readable, so the application state is rebuilt from the
    /// stored configuration.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("filesystem permission granted - reloading configured files");
                self.app = foodboard::initialize(&self.config);
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("filesystem permission denied - using built-in data");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    fn execute_action(&self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
