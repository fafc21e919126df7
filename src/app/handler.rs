//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It is the primary
//! control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Every transition is synchronous; there are no loading or error UI states
//! and nothing to cancel.
//!
//! # Event Types
//!
//! - **Paging**: `PageNext`, `PagePrev`, `PageJump`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Data**: `FoodsLoaded` (source-list replacement)

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::FoodRecord;

use super::modes::{InputMode, SearchFocus};

/// Events triggered by user input or configuration changes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Advances to the next page (no-op on the last page).
    PageNext,
    /// Retreats to the previous page (no-op on page 1).
    PagePrev,
    /// Jumps directly to a 1-based page number, clamped into range.
    PageJump(usize),
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Enters search mode with typing focus and a fresh query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the paged results (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Replaces the source record list.
    ///
    /// Emitted when a configured food file finishes loading. Resets the view
    /// to page 1 and re-filters.
    FoodsLoaded {
        /// The new source records, in display order.
        foods: Vec<FoodRecord>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions. It
/// pattern-matches on event types, calls state mutation methods, and collects
/// actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A tuple of (`should_render`, actions): the boolean tells the runtime
/// whether the UI changed, and the actions are side effects to execute in
/// sequence (at most a pane close for this plugin).
///
/// # Errors
///
/// Reserved for state mutations that can fail; the current table transitions
/// are infallible, so this always returns `Ok` today.
///
/// # Example
///
/// ```
/// use foodboard::app::{handle_event, AppState, Event};
/// use foodboard::domain::sample_foods;
/// use foodboard::ui::Theme;
///
/// let mut state = AppState::new(sample_foods(), Theme::default());
/// let (should_render, actions) = handle_event(&mut state, &Event::PageNext)?;
/// assert!(should_render);
/// assert!(actions.is_empty());
/// # Ok::<(), foodboard::domain::FoodboardError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PageNext => {
            let before = state.current_page;
            state.page_next();
            Ok((state.current_page != before, vec![]))
        }
        Event::PagePrev => {
            let before = state.current_page;
            state.page_prev();
            Ok((state.current_page != before, vec![]))
        }
        Event::PageJump(page) => {
            let before = state.current_page;
            state.jump_to_page(*page);
            Ok((state.current_page != before, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_search_filter();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Escape => {
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::FoodsLoaded { foods } => {
            state.set_foods(foods.clone());
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_foods;
    use crate::ui::Theme;

    fn sample_state() -> AppState {
        AppState::new(sample_foods(), Theme::default())
    }

    fn dispatch(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn paging_events_report_whether_the_page_moved() {
        let mut state = sample_state();

        let (rendered, _) = dispatch(&mut state, Event::PagePrev);
        assert!(!rendered);

        let (rendered, _) = dispatch(&mut state, Event::PageNext);
        assert!(rendered);
        assert_eq!(state.current_page, 2);

        dispatch(&mut state, Event::PageNext);
        let (rendered, _) = dispatch(&mut state, Event::PageNext);
        assert!(!rendered);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn page_jump_clamps_into_range() {
        let mut state = sample_state();

        dispatch(&mut state, Event::PageJump(2));
        assert_eq!(state.current_page, 2);

        dispatch(&mut state, Event::PageJump(9));
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn typing_filters_and_resets_the_page() {
        let mut state = sample_state();
        dispatch(&mut state, Event::PageNext);
        assert_eq!(state.current_page, 2);

        dispatch(&mut state, Event::SearchMode);
        for c in "cake".chars() {
            dispatch(&mut state, Event::Char(c));
        }

        assert_eq!(state.current_page, 1);
        // Cake, Pancakes, Cupcakes, Cheesecake.
        assert_eq!(state.filtered_foods.len(), 4);

        dispatch(&mut state, Event::Backspace);
        assert_eq!(state.search_query, "cak");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn characters_are_ignored_outside_typing_focus() {
        let mut state = sample_state();

        let (rendered, _) = dispatch(&mut state, Event::Char('x'));
        assert!(!rendered);
        assert!(state.search_query.is_empty());

        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::Char('p'));
        dispatch(&mut state, Event::FocusResults);
        let (rendered, _) = dispatch(&mut state, Event::Char('x'));
        assert!(!rendered);
        assert_eq!(state.search_query, "p");
    }

    #[test]
    fn focus_results_with_empty_query_leaves_search() {
        let mut state = sample_state();
        dispatch(&mut state, Event::SearchMode);

        dispatch(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn exit_search_clears_query_and_restores_full_list() {
        let mut state = sample_state();
        dispatch(&mut state, Event::SearchMode);
        for c in "zzz".chars() {
            dispatch(&mut state, Event::Char(c));
        }
        assert!(state.filtered_foods.is_empty());

        dispatch(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered_foods.len(), 25);
    }

    #[test]
    fn close_focus_emits_the_only_action() {
        let mut state = sample_state();
        let (rendered, actions) = dispatch(&mut state, Event::CloseFocus);
        assert!(!rendered);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn foods_loaded_replaces_the_source_list() {
        let mut state = sample_state();
        dispatch(&mut state, Event::PageNext);

        let (rendered, _) = dispatch(
            &mut state,
            Event::FoodsLoaded {
                foods: sample_foods()[..4].to_vec(),
            },
        );

        assert!(rendered);
        assert_eq!(state.foods.len(), 4);
        assert_eq!(state.current_page, 1);
    }
}
