//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/UI layers. It implements the
//! event-driven architecture that powers the interactive table.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Re-render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and table style state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use foodboard::app::{handle_event, AppState, Event};
//! use foodboard::domain::sample_foods;
//! use foodboard::ui::Theme;
//!
//! let mut state = AppState::new(sample_foods(), Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::PageNext)?;
//! # Ok::<(), foodboard::domain::FoodboardError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, TableStyle};
pub use state::AppState;
