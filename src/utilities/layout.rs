// Layout Utilities
// Rect and text helpers for modals

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Centered rectangle taking a percentage of `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rectangle of a fixed size, shrunk to fit inside `r`
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Wrap text to fit within max width (counted in chars)
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();

        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("I'm interested in Prime Agricultural Land", 20);
        assert_eq!(lines, vec!["I'm interested in", "Prime Agricultural", "Land"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_centered_fixed_fits() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_fixed(20, 4, area), Rect::new(30, 10, 20, 4));
        assert_eq!(centered_fixed(200, 40, area), area);
    }

    #[test]
    fn test_centered_rect_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(80, 80, area);
        assert!(inner.width <= 80 && inner.height <= 40);
        assert!(inner.x >= 10 && inner.y >= 5);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x141420), Color::Rgb(0x14, 0x14, 0x20));
    }
}
