//! Search filtering and pagination core.
//!
//! This module contains the pure functions behind the table: reducing the
//! source list to records matching a search query, slicing the result into
//! fixed-size pages, and deriving the page-number window for the pagination
//! strip. Keeping this logic free of UI state makes it independently
//! unit-testable; [`crate::app::AppState`] calls into it after every state
//! mutation.
//!
//! # Conventions
//!
//! Pages are 1-based: page 1 holds records `[0, page_size)` of the filtered
//! list. An empty filtered list still counts as one page (the no-results
//! page). A requested page outside `[1, total_pages]` is clamped rather than
//! rejected, so a shrinking source list can never strand the view on an
//! out-of-range page.

use super::food::FoodRecord;

/// Maximum number of page indicators shown in the pagination strip.
const MAX_VISIBLE_PAGES: usize = 3;

/// Filters records to those whose name contains `query`, case-insensitively.
///
/// Plain substring matching only; the query is not tokenized and there is no
/// fuzzy matching. An empty query matches every record. Source order is
/// preserved and duplicates are kept.
#[must_use]
pub fn filter_foods(source: &[FoodRecord], query: &str) -> Vec<FoodRecord> {
    if query.is_empty() {
        return source.to_vec();
    }

    let needle = query.to_lowercase();
    source
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Finds the first record whose name equals `query` case-insensitively.
///
/// Backs the exact-match advisory in the fixed-height table style. With
/// duplicate names only the first occurrence is reported; the record is never
/// removed from the filtered results.
#[must_use]
pub fn exact_match<'a>(source: &'a [FoodRecord], query: &str) -> Option<&'a FoodRecord> {
    if query.is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    source
        .iter()
        .find(|record| record.name.to_lowercase() == needle)
}

/// A fully derived view of one page of a filtered list.
///
/// Produced by [`paginate`] from the filtered length, the requested page, and
/// the page size. Everything the presenter needs about pagination lives here;
/// nothing is stored between renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Effective current page after clamping into `[1, total_pages]`.
    pub current_page: usize,
    /// Total page count, never below 1.
    pub total_pages: usize,
    /// Index of the first visible record within the filtered list.
    pub start_index: usize,
    /// One past the index of the last visible record.
    pub end_index: usize,
    /// Page numbers to show in the pagination strip (up to three).
    pub window: Vec<usize>,
}

impl PageView {
    /// Returns the visible slice of `filtered` for this page.
    #[must_use]
    pub fn slice<'a>(&self, filtered: &'a [FoodRecord]) -> &'a [FoodRecord] {
        &filtered[self.start_index..self.end_index]
    }

    /// Whether advancing to the next page would change anything.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether retreating to the previous page would change anything.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// Computes the page view for a filtered list of `filtered_len` records.
///
/// `requested_page` is clamped into `[1, total_pages]`; callers may pass a
/// stale page number after the list shrank and still get a valid view.
/// `page_size` of zero is treated as one to keep the arithmetic total.
#[must_use]
pub fn paginate(filtered_len: usize, requested_page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let total_pages = filtered_len.div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);

    let start_index = (current_page - 1) * page_size;
    let end_index = (start_index + page_size).min(filtered_len);

    PageView {
        current_page,
        total_pages,
        start_index,
        end_index,
        window: page_window(current_page, total_pages),
    }
}

/// Computes up to three visible page indicators around `current`.
///
/// Policy: with three or fewer pages show all of them; near the start show
/// `{1, 2, 3}`; near the end show the last three; otherwise center the window
/// on the current page.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= MAX_VISIBLE_PAGES {
        (1..=total).collect()
    } else if current <= 2 {
        vec![1, 2, 3]
    } else if current >= total - 1 {
        vec![total - 2, total - 1, total]
    } else {
        vec![current - 1, current, current + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::{sample_foods, FoodRecord};

    fn records(names: &[&str]) -> Vec<FoodRecord> {
        names
            .iter()
            .map(|name| FoodRecord::new(*name, 1, 1))
            .collect()
    }

    #[test]
    fn empty_query_matches_everything_in_source_order() {
        let foods = sample_foods();
        let filtered = filter_foods(&foods, "");
        assert_eq!(filtered, foods);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let foods = sample_foods();

        let filtered = filter_foods(&foods, "cake");
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cake", "Pancakes", "Cupcakes", "Cheesecake"]);

        // Excluded records really do not match.
        for record in &foods {
            let included = filtered.iter().any(|f| f == record);
            assert_eq!(included, record.name.to_lowercase().contains("cake"));
        }

        assert_eq!(filter_foods(&foods, "PIZZA").len(), 1);
        assert!(filter_foods(&foods, "zzz").is_empty());
    }

    #[test]
    fn duplicates_are_kept_not_deduplicated() {
        let foods = records(&["Pizza", "Pizza", "Pasta"]);
        assert_eq!(filter_foods(&foods, "pizza").len(), 2);
    }

    #[test]
    fn exact_match_finds_first_case_insensitive_equal_name() {
        let foods = sample_foods();
        assert_eq!(exact_match(&foods, "pizza").unwrap().name, "Pizza");
        assert_eq!(exact_match(&foods, "Pizza").unwrap().upvotes, 210);
        assert!(exact_match(&foods, "pizz").is_none());
        assert!(exact_match(&foods, "").is_none());

        let dupes = records(&["Cake", "Cake"]);
        let hit = exact_match(&dupes, "cake").unwrap();
        assert!(std::ptr::eq(hit, &dupes[0]));
    }

    #[test]
    fn sample_list_paginates_into_three_pages() {
        let view = paginate(25, 1, 10);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 1);
        assert_eq!((view.start_index, view.end_index), (0, 10));
        assert_eq!(view.window, vec![1, 2, 3]);

        let last = paginate(25, 3, 10);
        assert_eq!((last.start_index, last.end_index), (20, 25));
        assert!(!last.has_next());
        assert!(last.has_prev());
    }

    #[test]
    fn empty_list_still_yields_one_page() {
        let view = paginate(0, 1, 10);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert_eq!((view.start_index, view.end_index), (0, 0));
        assert!(!view.has_next());
        assert!(!view.has_prev());
    }

    #[test]
    fn twelve_records_page_two_shows_the_tail() {
        let view = paginate(12, 2, 10);
        assert_eq!(view.total_pages, 2);
        assert_eq!((view.start_index, view.end_index), (10, 12));
        assert!(!view.has_next());
        assert!(view.has_prev());

        let foods = records(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
        ]);
        let visible = view.slice(&foods);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "k");
        assert_eq!(visible[1].name, "l");
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        assert_eq!(paginate(25, 99, 10).current_page, 3);
        assert_eq!(paginate(25, 0, 10).current_page, 1);
        // A list that shrank below the old page lands on the new last page.
        assert_eq!(paginate(5, 3, 10).current_page, 1);
    }

    #[test]
    fn page_window_policy() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 8), vec![1, 2, 3]);
        assert_eq!(page_window(2, 8), vec![1, 2, 3]);
        assert_eq!(page_window(7, 8), vec![6, 7, 8]);
        assert_eq!(page_window(8, 8), vec![6, 7, 8]);
        assert_eq!(page_window(5, 8), vec![4, 5, 6]);
    }
}
