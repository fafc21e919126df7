//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input. Actions
//! bridge pure state transformations and effectful operations.
//!
//! The table is fully synchronous and in-memory, so the only side effect left
//! to the runtime is hiding the pane; everything else is a state mutation
//! followed by a re-render.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Produced by the event handler and executed by the plugin shim in `main.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing
    /// 'q' in normal mode).
    CloseFocus,
}
