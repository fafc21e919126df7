//! Pagination strip component renderer.
//!
//! Renders the right-aligned control strip beneath the table: the visible
//! range summary, the previous/next controls, and the page-number window with
//! the current page highlighted.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Previous-page control glyph.
const PREV_GLYPH: &str = "‹";

/// Next-page control glyph.
const NEXT_GLYPH: &str = "›";

/// Renders the pagination strip at the specified row, right-aligned.
///
/// # Layout
///
/// ```text
///                    Viewing 1-10 of 25  ‹  1 2 3  ›
/// ```
///
/// The current page number is drawn with the `page_current` colors; disabled
/// prev/next controls are dimmed. The strip never exceeds the terminal width;
/// on very narrow panes it degrades by starting at column 1.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    // Plain-text length, used to right-align before styling is applied.
    let mut plain_len = info.range_label.chars().count() + 2 + 1; // label + gap + prev
    for page in &info.window {
        plain_len += 1 + page.to_string().len();
    }
    plain_len += 2; // gap + next

    position_cursor(row, 1);
    print!("{}", " ".repeat(cols.saturating_sub(plain_len)));

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", info.range_label);
    print!("{}", Theme::reset());
    print!("  ");

    render_control(PREV_GLYPH, info.prev_enabled, theme);

    for page in &info.window {
        print!(" ");
        if *page == info.current_page {
            print!("{}", Theme::fg(&theme.colors.page_current_fg));
            print!("{}", Theme::bg(&theme.colors.page_current_bg));
            print!("{page}");
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{page}");
            print!("{}", Theme::reset());
        }
    }

    print!(" ");
    render_control(NEXT_GLYPH, info.next_enabled, theme);

    row + 1
}

/// Renders one prev/next control, dimmed when disabled.
fn render_control(glyph: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{glyph}");
    print!("{}", Theme::reset());
}
