//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with filtered count
//! - [`search`]: Search input box (border, query text, placeholder)
//! - [`table`]: Food list with FOOD / MENTIONS / UPVOTES columns
//! - [`pagination`]: Range summary, prev/next controls, page-number window
//! - [`footer`]: Keybinding hints
//!
//! # Layout Modes
//!
//! Two high-level layout functions compose the components:
//!
//! - [`render_normal_mode`]: Header + Table + Pagination + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Table + Pagination + Footer

mod footer;
mod header;
mod pagination;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UiViewModel};

use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search box).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers]
/// [Table Rows]
/// [Pagination Strip]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme);
    current_row = render_table_rows(current_row, &vm.rows, theme, cols);
    let _current_row = render_pagination(current_row, &vm.pagination, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search box).
///
/// Identical to normal mode except a 3-line search box sits between the
/// header border and the table headers.
pub fn render_search_mode(
    vm: &UiViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_table_headers(current_row, theme);
    current_row = render_table_rows(current_row, &vm.rows, theme, cols);
    let _current_row = render_pagination(current_row, &vm.pagination, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
