// Toast Notices
// Renders active notices in the bottom-left corner, stacked upward

use ratatui::{
    layout::Rect,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::core::{ActiveNotice, NoticeLevel};
use super::Styles;

fn icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✗",
        NoticeLevel::Info => "ℹ",
    }
}

/// Render toasts inset by 1 from the left and bottom edges, newest at the bottom
pub fn render_toasts(f: &mut Frame, area: Rect, notices: &[ActiveNotice]) {
    if notices.is_empty() || area.width < 4 || area.height < 2 {
        return;
    }

    let max_width = area.width.saturating_sub(2) as usize;
    let contents: Vec<(String, NoticeLevel)> = notices
        .iter()
        .map(|n| {
            let text = format!(" {} {} ", icon(n.notice.level), n.notice.message);
            (text.chars().take(max_width).collect(), n.notice.level)
        })
        .collect();

    let width = contents
        .iter()
        .map(|(text, _)| text.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let mut y_offset = 0u16;
    for (text, level) in contents.iter().rev() {
        if y_offset + 1 >= area.height {
            break;
        }

        let toast_area = Rect {
            x: area.x + 1,
            y: area.y + area.height - 2 - y_offset,
            width,
            height: 1,
        };

        f.render_widget(Clear, toast_area);
        f.render_widget(Paragraph::new(text.as_str()).style(Styles::notice(*level)), toast_area);

        y_offset += 1;
    }
}
