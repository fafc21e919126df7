//! Input mode and table style state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes and table presentation. These types determine which keybindings are
//! active, how input is processed, and how the table body is laid out.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default paging and command mode
//! - **Search**: Active search with typing or result navigation focus
//!
//! Table styles control row layout:
//! - **Compact**: Exactly the visible rows, nothing more
//! - **`FixedHeight`**: Rows padded with placeholders to a constant height

/// Focus state within search mode.
///
/// Determines whether search input is being typed or the filtered results are
/// being paged through. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is paging through filtered results.
    ///
    /// Accepts h/l for paging, digits for jumps, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and whether the search box is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default paging and command mode.
    ///
    /// Available keybindings: h/l (page), digits (jump), / (search),
    /// q (quit), Esc (clear query).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or paging results. Footer displays search-specific keybindings.
    Search(SearchFocus),
}

/// Table body layout style.
///
/// Two observed presentations of the same page data. The fixed-height style is
/// the default; it keeps the table a constant number of rows tall and carries
/// the exact-match advisory behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Renders exactly the current page's rows. An empty page collapses to a
    /// single no-results row.
    Compact,

    /// Pads the current page's rows with blank placeholders so exactly
    /// `page_size` rows are always rendered. The first placeholder becomes an
    /// advisory row when the query exactly names a source record, and the
    /// prev/next controls are both disabled whenever the whole filtered list
    /// fits on one page.
    FixedHeight,
}

impl TableStyle {
    /// Parses a table style from its configuration name.
    ///
    /// Recognized names: `compact`, `fixed`. Returns `None` for anything else
    /// so callers can fall back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "compact" => Some(Self::Compact),
            "fixed" => Some(Self::FixedHeight),
            _ => None,
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::FixedHeight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_style_parses_known_names() {
        assert_eq!(TableStyle::from_name("compact"), Some(TableStyle::Compact));
        assert_eq!(TableStyle::from_name("fixed"), Some(TableStyle::FixedHeight));
        assert_eq!(TableStyle::from_name("spacious"), None);
    }
}
