//! Layout and hit-testing helpers shared by components.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Whether the cell at (`column`, `row`) lies inside `area`.
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Index of the first area containing the mouse position.
pub fn find_target_index_by_mouse_position(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    areas.iter().position(|area| contains(*area, column, row))
}

/// Display width of `text` in terminal cells.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_respects_exclusive_edges() {
        let areas = [Rect::new(0, 0, 5, 1), Rect::new(6, 0, 4, 1)];
        assert_eq!(find_target_index_by_mouse_position(&areas, 4, 0), Some(0));
        assert_eq!(find_target_index_by_mouse_position(&areas, 5, 0), None);
        assert_eq!(find_target_index_by_mouse_position(&areas, 9, 0), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&areas, 9, 1), None);
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(display_width("Quiz"), 4);
        assert_eq!(display_width("測驗"), 4);
    }
}
