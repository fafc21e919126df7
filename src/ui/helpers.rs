//! Shared rendering utilities and helpers.
//!
//! Low-level helpers used across UI components: cursor positioning and
//! width-constrained cell formatting. Rendering goes straight to stdout with
//! ANSI escape sequences, as Zellij plugins draw by printing.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Fits `text` into exactly `width` display columns.
///
/// Truncates with a `...` suffix when too long, pads with spaces when too
/// short. Operates on characters, not bytes, so multi-byte names stay intact.
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();

    if chars.len() > width {
        // Widths too narrow for an ellipsis just hard-truncate.
        if width <= 3 {
            return chars[..width].iter().collect();
        }
        let truncated: String = chars[..width - 3].iter().collect();
        format!("{truncated}...")
    } else {
        let padding = width - chars.len();
        format!("{text}{}", " ".repeat(padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_padded_to_width() {
        assert_eq!(fit_cell("Pizza", 8), "Pizza   ");
        assert_eq!(fit_cell("", 3), "   ");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        assert_eq!(fit_cell("French fries", 8), "Frenc...");
        assert_eq!(fit_cell("Pizza", 5), "Pizza");
    }

    #[test]
    fn narrow_widths_never_exceed_the_requested_width() {
        assert_eq!(fit_cell("Pizza", 3), "Piz");
        assert_eq!(fit_cell("Pizza", 2), "Pi");
        assert_eq!(fit_cell("Pizza", 0), "");
    }

    #[test]
    fn multibyte_names_count_characters_not_bytes() {
        assert_eq!(fit_cell("crème brûlée", 12), "crème brûlée");
        assert_eq!(fit_cell("crème brûlée", 14), "crème brûlée  ");
    }
}
