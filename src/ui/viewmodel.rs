//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information: formatted counters, padded row
//! lists, and pagination control state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: the table
/// body rows (already padded per table style), header and footer text, the
/// pagination strip, and the search box when active.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Table body rows in display order.
    pub rows: Vec<DisplayRow>,

    /// Header information (title, filtered count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Pagination strip state.
    pub pagination: PaginationInfo,

    /// Optional search box information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// One row of the table body.
///
/// The row kind decides both content and styling; the renderer never inspects
/// application state to tell a record from a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    /// A food record with pre-formatted counter columns.
    Food {
        /// Display name of the food.
        name: String,
        /// Mention count, already stringified.
        mentions: String,
        /// Upvote count, already stringified.
        upvotes: String,
    },

    /// A full-width notice row (the no-results message).
    Notice(String),

    /// A highlighted advisory row (exact-match collision alert). Cosmetic
    /// only; the named record remains in the results.
    Alert(String),

    /// A blank placeholder row keeping the table height constant.
    Blank,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "h/l: page  /: search  q: quit").
    pub keybindings: String,
}

/// Pagination strip display information.
///
/// Mirrors the paginator's derived values plus the per-style control gating,
/// so the component can draw the strip without recomputing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Effective current page (1-based, already clamped).
    pub current_page: usize,

    /// Page numbers to show as indicators (up to three).
    pub window: Vec<usize>,

    /// Human-readable range summary (e.g., "Viewing 1-10 of 25").
    pub range_label: String,

    /// Whether the previous-page control is operable.
    pub prev_enabled: bool,

    /// Whether the next-page control is operable.
    pub next_enabled: bool,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
