// Popup Helpers
// Modal frames, background dimming and the loading overlay

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::utilities::{centered_fixed, centered_rect};
use super::Styles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Dim everything already drawn in `area`
pub fn render_dim_background(f: &mut Frame, area: Rect) {
    let dim_block = Paragraph::new("").style(Styles::dim_background());
    f.render_widget(dim_block, area);
}

/// Clear a centered region, draw a titled panel and return its inner area
pub fn render_modal_frame(
    f: &mut Frame,
    area: Rect,
    title: &str,
    percent_x: u16,
    percent_y: u16,
) -> Rect {
    let modal_area = centered_rect(percent_x, percent_y, area);
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Styles::modal_border())
        .style(Styles::panel())
        .title(Span::styled(format!(" {} ", title), Styles::header()));
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);
    inner
}

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Veil shown above everything while a simulated action runs
pub fn render_loading_overlay(f: &mut Frame, area: Rect, label: &str, tick: u64) {
    render_dim_background(f, area);

    let width = (label.chars().count() as u16 + 10).max(28);
    let overlay_area = centered_fixed(width, 5, area);
    f.render_widget(Clear, overlay_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_frame(tick), Styles::spinner()),
            Span::raw(" "),
            Span::raw(format!("{}...", label)),
        ]),
    ];

    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Styles::panel())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Styles::spinner()),
        );
    f.render_widget(overlay, overlay_area);
}
