use ratatui::layout::Rect;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Formats elapsed seconds as the MM:SS session clock.
pub fn format_session_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// A `width` x `height` rectangle centered inside `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        let result = truncate_string("Short string", 20);
        assert_eq!(result, "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_multibyte_boundary() {
        // Cut point lands inside the ö; must back off to a boundary, not panic.
        let result = truncate_string("Tür öffnen und schließen", 9);
        assert_eq!(result, "Tür ...");
        assert!(result.len() <= 9);
    }

    #[test]
    fn test_format_session_time_zero() {
        assert_eq!(format_session_time(0), "00:00");
    }

    #[test]
    fn test_format_session_time_padding() {
        assert_eq!(format_session_time(9), "00:09");
        assert_eq!(format_session_time(65), "01:05");
        assert_eq!(format_session_time(600), "10:00");
    }

    #[test]
    fn test_format_session_time_over_an_hour() {
        assert_eq!(format_session_time(3661), "61:01");
    }

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 8);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect, Rect::new(0, 0, 30, 8));
    }

    #[test]
    fn test_centered_rect_respects_offset_area() {
        let area = Rect::new(10, 5, 20, 10);
        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(15, 8, 10, 4));
    }
}
