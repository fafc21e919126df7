//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for filtering, paging, and UI view model
//! generation. It serves as the single source of truth for all transient UI
//! state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the source food list) from derived state
//! (the filtered list, the current page) to keep state transitions simple.
//! Pagination itself is never stored: every render recomputes a
//! [`PageView`](crate::domain::PageView) from the filtered length and the
//! requested page, which clamps stale page numbers after the list shrinks.
//!
//! # State Components
//!
//! - **Foods**: Master record list supplied at initialization
//! - **Filtered Foods**: Subset matching the current search query
//! - **Current Page**: 1-based page within the filtered results
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//! - **Table Style**: Compact or fixed-height row layout

use crate::domain::{exact_match, filter_foods, paginate, FoodRecord, PageView};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayRow, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo, UiViewModel,
};

use super::modes::{InputMode, SearchFocus, TableStyle};

/// Notice shown in place of rows when the filter matches nothing.
const NO_RESULTS_MESSAGE: &str = "No matching foods found. Try another search.";

/// Central application state container.
///
/// Holds all transient UI state including the record lists, search query,
/// current page, and mode information. Mutated by the event handler in
/// response to user input. View models are computed on-demand from state
/// snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Master list of food records, in caller-supplied order.
    ///
    /// Replaced only by [`AppState::set_foods`]; never sorted or deduplicated.
    pub foods: Vec<FoodRecord>,

    /// Records matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()` after query or source changes.
    /// Preserves source order.
    pub filtered_foods: Vec<FoodRecord>,

    /// 1-based page within `filtered_foods`.
    ///
    /// Reset to 1 whenever the filtered list is recomputed; clamped into
    /// range by pagination on every render.
    pub current_page: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events, cleared
    /// by `ExitSearch` and `Escape` events.
    pub search_query: String,

    /// Table body layout style.
    pub table_style: TableStyle,

    /// Number of records per page.
    pub page_size: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with the given records and theme.
    ///
    /// Starts on page 1 in normal mode with an empty query, so the filtered
    /// list initially equals the source list. Page size defaults to 10 and
    /// the table style to fixed-height; `initialize` overrides both from the
    /// plugin configuration.
    #[must_use]
    pub fn new(foods: Vec<FoodRecord>, theme: Theme) -> Self {
        let mut state = Self {
            filtered_foods: Vec::new(),
            foods,
            current_page: 1,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            table_style: TableStyle::default(),
            page_size: 10,
            theme,
        };
        state.apply_search_filter();
        state
    }

    /// Replaces the source list, resetting the view to page 1.
    ///
    /// A source-list change invalidates the filtered list and the current
    /// page, so both are recomputed.
    pub fn set_foods(&mut self, foods: Vec<FoodRecord>) {
        tracing::debug!(record_count = foods.len(), "replacing source food list");
        self.foods = foods;
        self.apply_search_filter();
    }

    /// Recomputes the filtered list from the current query.
    ///
    /// Committing a new filtered list always resets `current_page` to 1,
    /// regardless of whether the list changed length. This keeps the user off
    /// an empty page after narrowing a search.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_foods = self.foods.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.filtered_foods = filter_foods(&self.foods, &self.search_query);
        self.current_page = 1;

        tracing::debug!(
            filtered_count = self.filtered_foods.len(),
            "search filter applied"
        );
    }

    /// Returns the derived pagination view for the current state.
    ///
    /// Clamps the stored page into range as a side-purpose: callers that read
    /// `view.current_page` always see a valid page even if `current_page`
    /// went stale.
    #[must_use]
    pub fn page_view(&self) -> PageView {
        paginate(self.filtered_foods.len(), self.current_page, self.page_size)
    }

    /// Advances to the next page. No-op on the last page; no wraparound.
    pub fn page_next(&mut self) {
        let view = self.page_view();
        if view.has_next() {
            self.current_page = view.current_page + 1;
        }
    }

    /// Retreats to the previous page. No-op on page 1; no wraparound.
    pub fn page_prev(&mut self) {
        let view = self.page_view();
        if view.has_prev() {
            self.current_page = view.current_page - 1;
        }
    }

    /// Jumps directly to a page, clamping into the valid range.
    pub fn jump_to_page(&mut self, page: usize) {
        let total = self.page_view().total_pages;
        self.current_page = page.clamp(1, total);
    }

    /// Computes a renderable UI view model from the current state.
    ///
    /// Transforms application state into a structured representation the
    /// renderer can draw without touching business logic: the visible rows
    /// (padded per table style), header and footer text, the pagination
    /// strip, and the search box when active.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        let view = self.page_view();

        UiViewModel {
            rows: self.compute_rows(&view),
            header: self.compute_header(),
            footer: self.compute_footer(),
            pagination: self.compute_pagination(&view),
            search_bar: self.compute_search_bar(),
        }
    }

    /// Builds the table body rows for the given page view.
    ///
    /// Compact style emits exactly the visible records (or one notice row
    /// when empty). Fixed-height style pads with blank placeholders to
    /// `page_size` rows, promoting the first placeholder to an advisory row
    /// when the query exactly names a source record.
    fn compute_rows(&self, view: &PageView) -> Vec<DisplayRow> {
        let mut rows: Vec<DisplayRow> = view
            .slice(&self.filtered_foods)
            .iter()
            .map(|record| DisplayRow::Food {
                name: record.name.clone(),
                mentions: record.mentions.to_string(),
                upvotes: record.upvotes.to_string(),
            })
            .collect();

        if rows.is_empty() {
            rows.push(DisplayRow::Notice(NO_RESULTS_MESSAGE.to_string()));
        }

        if self.table_style == TableStyle::FixedHeight {
            if rows.len() < self.page_size {
                if let Some(record) = exact_match(&self.foods, &self.search_query) {
                    rows.push(DisplayRow::Alert(format!(
                        "Exact match: \"{}\" ({} mentions, {} upvotes)",
                        record.name, record.mentions, record.upvotes
                    )));
                }
            }
            while rows.len() < self.page_size {
                rows.push(DisplayRow::Blank);
            }
        }

        rows
    }

    /// Computes the pagination strip state.
    ///
    /// The fixed-height style disables both paging controls whenever the
    /// whole filtered list fits on a single page, on top of the usual
    /// disabled-at-boundary rule.
    fn compute_pagination(&self, view: &PageView) -> PaginationInfo {
        let single_page_lock = self.table_style == TableStyle::FixedHeight
            && self.filtered_foods.len() <= self.page_size;

        let range_label = if self.filtered_foods.is_empty() {
            "Viewing 0-0 of 0".to_string()
        } else {
            format!(
                "Viewing {}-{} of {}",
                view.start_index + 1,
                view.end_index,
                self.filtered_foods.len()
            )
        };

        PaginationInfo {
            current_page: view.current_page,
            window: view.window.clone(),
            range_label,
            prev_enabled: view.has_prev() && !single_page_lock,
            next_enabled: view.has_next() && !single_page_lock,
        }
    }

    /// Computes header text: plugin title plus the filtered record count.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Foodboard ({}) ", self.filtered_foods.len()),
        }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: done  h/l or Ctrl+n/p: page  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  h/l: page  1-9: jump".to_string()
            }
            InputMode::Normal => {
                "h/l or Ctrl+n/p: page  1-9: jump  /: search  q: quit".to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes search box state if search mode is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_foods;

    fn sample_state() -> AppState {
        AppState::new(sample_foods(), Theme::default())
    }

    fn food_names(rows: &[DisplayRow]) -> Vec<String> {
        rows.iter()
            .filter_map(|row| match row {
                DisplayRow::Food { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn unfiltered_sample_shows_first_ten_on_page_one() {
        let state = sample_state();
        let vm = state.compute_viewmodel();

        let names = food_names(&vm.rows);
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Ice cream");
        assert_eq!(names[9], "Burgers");
        assert_eq!(vm.pagination.current_page, 1);
        assert_eq!(vm.pagination.window, vec![1, 2, 3]);
        assert_eq!(vm.pagination.range_label, "Viewing 1-10 of 25");
    }

    #[test]
    fn query_change_resets_to_page_one() {
        let mut state = sample_state();
        state.current_page = 3;

        state.search_query = "cake".to_string();
        state.apply_search_filter();

        assert_eq!(state.current_page, 1);
        // Same-length result still resets.
        state.current_page = 1;
        state.search_query = "cak".to_string();
        state.apply_search_filter();
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn cake_query_matches_four_records() {
        let mut state = sample_state();
        state.search_query = "cake".to_string();
        state.apply_search_filter();

        let names: Vec<&str> = state
            .filtered_foods
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Cake", "Pancakes", "Cupcakes", "Cheesecake"]);
        assert_eq!(state.page_view().total_pages, 1);
    }

    #[test]
    fn paging_is_bounded_without_wraparound() {
        let mut state = sample_state();

        state.page_prev();
        assert_eq!(state.current_page, 1);

        state.page_next();
        state.page_next();
        assert_eq!(state.current_page, 3);

        state.page_next();
        assert_eq!(state.current_page, 3);

        state.jump_to_page(99);
        assert_eq!(state.current_page, 3);
        state.jump_to_page(2);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn shrinking_source_list_clamps_the_stale_page() {
        let mut state = sample_state();
        state.current_page = 3;

        // Replace the source with a shorter list without touching the query.
        state.foods.truncate(5);
        state.filtered_foods.truncate(5);

        let view = state.page_view();
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 1);
        let vm = state.compute_viewmodel();
        assert_eq!(food_names(&vm.rows).len(), 5);
    }

    #[test]
    fn set_foods_resets_page_and_refilters() {
        let mut state = sample_state();
        state.current_page = 2;
        state.search_query = "a".to_string();
        state.apply_search_filter();
        state.current_page = 2;

        state.set_foods(sample_foods()[..3].to_vec());

        assert_eq!(state.current_page, 1);
        assert!(state
            .filtered_foods
            .iter()
            .all(|r| r.name.to_lowercase().contains('a')));
    }

    #[test]
    fn fixed_style_pads_to_page_size() {
        let mut state = sample_state();
        state.search_query = "cak".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 10);
        assert_eq!(food_names(&vm.rows).len(), 4);
        let blanks = vm
            .rows
            .iter()
            .filter(|row| matches!(row, DisplayRow::Blank))
            .count();
        assert_eq!(blanks, 6);
    }

    #[test]
    fn exact_query_alert_counts_against_the_padding() {
        let mut state = sample_state();
        // "cake" matches four records and exactly names one of them.
        state.search_query = "cake".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 10);
        assert_eq!(food_names(&vm.rows).len(), 4);
        assert!(matches!(&vm.rows[4], DisplayRow::Alert(msg) if msg.contains("\"Cake\"")));
        let blanks = vm
            .rows
            .iter()
            .filter(|row| matches!(row, DisplayRow::Blank))
            .count();
        assert_eq!(blanks, 5);
    }

    #[test]
    fn fixed_style_empty_result_shows_notice_plus_blanks() {
        let mut state = sample_state();
        state.search_query = "zzz".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 10);
        assert!(matches!(&vm.rows[0], DisplayRow::Notice(msg)
            if msg == "No matching foods found. Try another search."));
        let blanks = vm
            .rows
            .iter()
            .filter(|row| matches!(row, DisplayRow::Blank))
            .count();
        assert_eq!(blanks, 9);
    }

    #[test]
    fn compact_style_empty_result_is_a_single_notice_row() {
        let mut state = sample_state();
        state.table_style = TableStyle::Compact;
        state.search_query = "zzz".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 1);
        assert!(matches!(&vm.rows[0], DisplayRow::Notice(_)));
        assert_eq!(vm.pagination.range_label, "Viewing 0-0 of 0");
    }

    #[test]
    fn exact_query_promotes_first_placeholder_to_alert() {
        let mut state = sample_state();
        state.search_query = "Pizza".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 10);
        assert!(matches!(&vm.rows[0], DisplayRow::Food { name, .. } if name == "Pizza"));
        assert!(matches!(&vm.rows[1], DisplayRow::Alert(msg)
            if msg.contains("\"Pizza\"") && msg.contains("15 mentions")));
        assert!(matches!(vm.rows[2], DisplayRow::Blank));
    }

    #[test]
    fn compact_style_never_emits_alert_rows() {
        let mut state = sample_state();
        state.table_style = TableStyle::Compact;
        state.search_query = "Pizza".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 1);
        assert!(matches!(&vm.rows[0], DisplayRow::Food { .. }));
    }

    #[test]
    fn fixed_style_locks_paging_on_a_single_page() {
        let mut state = sample_state();
        state.search_query = "cake".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel();
        assert!(!vm.pagination.prev_enabled);
        assert!(!vm.pagination.next_enabled);
    }

    #[test]
    fn twelve_records_on_page_two_disable_next_only() {
        let mut state = AppState::new(sample_foods()[..12].to_vec(), Theme::default());
        state.page_next();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.pagination.current_page, 2);
        assert!(vm.pagination.prev_enabled);
        assert!(!vm.pagination.next_enabled);
        assert_eq!(vm.pagination.range_label, "Viewing 11-12 of 12");
        assert_eq!(food_names(&vm.rows).len(), 2);
    }

    #[test]
    fn header_counts_filtered_records() {
        let mut state = sample_state();
        assert_eq!(state.compute_viewmodel().header.title, " Foodboard (25) ");

        state.search_query = "cake".to_string();
        state.apply_search_filter();
        assert_eq!(state.compute_viewmodel().header.title, " Foodboard (4) ");
    }
}
