//! Table component renderer.
//!
//! Renders the food list as a three-column table with FOOD, MENTIONS, and
//! UPVOTES columns. Notice, advisory, and blank placeholder rows span all
//! columns.

use crate::ui::helpers::{fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

/// Width of the FOOD name column.
const NAME_COLUMN_WIDTH: usize = 40;

/// Width of each right-aligned counter column.
const COUNT_COLUMN_WIDTH: usize = 10;

/// Renders the table column headers at the specified row.
///
/// Displays "FOOD", "MENTIONS", and "UPVOTES" with bold styling and theme
/// colors; counter headers are right-aligned like the values beneath them.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}{:>width$}{:>width$}",
        fit_cell("FOOD", NAME_COLUMN_WIDTH),
        "MENTIONS",
        "UPVOTES",
        width = COUNT_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table body rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, rows: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = render_table_row(current_row, display_row, theme, cols);
    }
    current_row
}

/// Renders a single table body row at the specified position.
///
/// Food rows use the fixed column layout. Notice rows are centered across the
/// full width. Advisory rows fill the width with the alert colors. Blank
/// placeholder rows emit nothing but still consume a line.
fn render_table_row(row: usize, display_row: &DisplayRow, theme: &Theme, cols: usize) -> usize {
    match display_row {
        DisplayRow::Food {
            name,
            mentions,
            upvotes,
        } => {
            position_cursor(row, 1);
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!(
                "{}{:>width$}{:>width$}",
                fit_cell(name, NAME_COLUMN_WIDTH),
                mentions,
                upvotes,
                width = COUNT_COLUMN_WIDTH
            );
            print!("{}", Theme::reset());
        }
        DisplayRow::Notice(message) => {
            let msg_len = message.chars().count();
            let padding = (cols.saturating_sub(msg_len)) / 2;

            position_cursor(row, 1);
            print!("{}", Theme::fg(&theme.colors.notice_fg));
            print!("{}", " ".repeat(padding));
            print!("{message}");
            print!("{}", Theme::reset());
        }
        DisplayRow::Alert(message) => {
            let msg_len = message.chars().count();

            position_cursor(row, 1);
            print!("{}", Theme::fg(&theme.colors.alert_fg));
            print!("{}", Theme::bg(&theme.colors.alert_bg));
            print!(" {message}");
            print!("{}", " ".repeat(cols.saturating_sub(msg_len + 1)));
            print!("{}", Theme::reset());
        }
        DisplayRow::Blank => {}
    }

    row + 1
}
