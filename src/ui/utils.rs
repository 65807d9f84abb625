use unicode_width::UnicodeWidthChar;

/// Points covered by one terminal row
pub const POINTS_PER_ROW: f32 = 16.0;
/// Points covered by one terminal column
pub const POINTS_PER_COLUMN: f32 = 8.0;
/// Border top, one content row, border bottom
pub const MIN_FIELD_ROWS: u16 = 3;

/// Terminal rows needed to show a field of `height` points
#[must_use]
pub fn rows_for_height(height: f32) -> u16 {
    let rows = (height / POINTS_PER_ROW).round();
    if rows.is_finite() && rows > f32::from(MIN_FIELD_ROWS) {
        rows.min(f32::from(u16::MAX)) as u16
    } else {
        MIN_FIELD_ROWS
    }
}

/// Character range of `content` that fits in `width` columns and keeps the
/// cursor visible.
///
/// Wide characters count for their column width. While scrolled, one column is
/// left free after the cursor.
pub fn visible_window(content: &str, cursor: usize, width: usize) -> (usize, usize) {
    let widths: Vec<usize> = content.chars().map(|c| c.width().unwrap_or(0)).collect();
    let length = widths.len();
    let cursor = cursor.min(length);
    if widths.iter().sum::<usize>() < width {
        return (0, length);
    }

    let mut start = cursor;
    let mut used = 1;
    while let Some(previous) = start.checked_sub(1) {
        let column_width = widths.get(previous).copied().unwrap_or(0);
        if used + column_width > width {
            break;
        }
        used += column_width;
        start = previous;
    }

    let mut end = start;
    let mut used = 0;
    while let Some(column_width) = widths.get(end).copied() {
        if used + column_width > width {
            break;
        }
        used += column_width;
        end += 1;
    }
    (start, end)
}

pub fn slice_by_chars(value: &str, start: usize, end: usize) -> String {
    value
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_for_height() {
        assert_eq!(rows_for_height(56.0), 4);
        assert_eq!(rows_for_height(80.0), 5);
        assert_eq!(rows_for_height(10.0), MIN_FIELD_ROWS);
        assert_eq!(rows_for_height(f32::NAN), MIN_FIELD_ROWS);
    }

    #[test]
    fn test_visible_window_short_content() {
        assert_eq!(visible_window("abc", 3, 10), (0, 3));
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        // cursor at the end needs a free column after the text
        assert_eq!(visible_window("abcdef", 6, 4), (3, 6));
        assert_eq!(visible_window("abcdef", 0, 4), (0, 4));
        assert_eq!(visible_window("abcdef", 4, 4), (1, 5));
    }

    #[test]
    fn test_visible_window_counts_wide_columns() {
        // each character takes two columns
        let wide = "一二三四五六";
        assert_eq!(visible_window(wide, 6, 7), (3, 6));
        assert_eq!(visible_window(wide, 0, 7), (0, 3));
        assert_eq!(visible_window(wide, 1, 12), (0, 6));
    }

    #[test]
    fn test_slice_by_chars() {
        assert_eq!(slice_by_chars("žluťoučký", 1, 4), "luť");
        assert_eq!(slice_by_chars("abc", 2, 1), "");
    }
}
