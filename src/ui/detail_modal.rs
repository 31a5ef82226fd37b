// Detail Modal
// Listing details with media tabs, the image viewer and launch buttons

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{MediaMode, PropertyRecord, ViewState};
use crate::utilities::{placeholder_art, resolve_image, ImageDisplay};
use super::popup::render_modal_frame;
use super::Styles;

/// Dot indicator for the image cursor; `None` unless there is more than one image
pub fn dot_indicator(len: usize, index: usize) -> Option<String> {
    if len <= 1 {
        return None;
    }
    let dots: Vec<&str> = (0..len)
        .map(|i| if i == index { "●" } else { "○" })
        .collect();
    Some(dots.join(" "))
}

/// Render the detail modal for the active property
pub fn render_detail_modal(f: &mut Frame, area: Rect, view: &ViewState) {
    let Some(property) = view.active_property() else {
        return;
    };

    let inner = render_modal_frame(f, area, &property.title, 86, 86);
    if inner.width < 10 || inner.height < 8 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Facts
            Constraint::Length(1), // Mode tabs
            Constraint::Min(6),    // Media panel
            Constraint::Length(1), // Navigation dots
            Constraint::Length(6), // Description and features
            Constraint::Length(1), // Key help
        ])
        .split(inner);

    render_facts(f, property, chunks[0]);
    render_mode_tabs(f, view, chunks[1]);
    render_media_panel(f, view, property, chunks[2]);

    if let Some(dots) = dot_indicator(view.filtered_set().len(), view.image_index()) {
        let spans: Vec<Span> = dots
            .split(' ')
            .map(|dot| {
                let style = if dot == "●" {
                    Styles::dot_active()
                } else {
                    Styles::dot_inactive()
                };
                Span::styled(format!("{} ", dot), style)
            })
            .collect();
        let dots_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        f.render_widget(dots_line, chunks[3]);
    }

    render_description(f, property, chunks[4]);

    let help = Paragraph::new(help_text(view)).style(Styles::footer());
    f.render_widget(help, chunks[5]);
}

fn render_facts(f: &mut Frame, property: &PropertyRecord, area: Rect) {
    let mut spans = vec![
        Span::raw(property.location.clone()),
        Span::raw("  "),
        Span::styled(property.price.clone(), Styles::price()),
    ];
    if !property.area.is_empty() {
        spans.push(Span::styled(format!("  {}", property.area), Styles::muted()));
    }
    let rooms = property.rooms_summary();
    if !rooms.is_empty() {
        spans.push(Span::styled(format!("  {}", rooms), Styles::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_mode_tabs(f: &mut Frame, view: &ViewState, area: Rect) {
    let mut spans = Vec::new();
    for (idx, mode) in view.available_modes().into_iter().enumerate() {
        let style = if mode == view.media_mode() {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} {} ", idx + 1, mode.label()), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_media_panel(f: &mut Frame, view: &ViewState, property: &PropertyRecord, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false))
        .title(Span::styled(format!(" {} ", view.media_mode().label()), Styles::title(false)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let busy = view.is_busy();
    let mut lines: Vec<Line> = Vec::new();

    if view.media_mode() == MediaMode::Virtual {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("360° Virtual Tour", Styles::header())));
        lines.push(Line::from("Walk through every room from your browser."));
        lines.push(Line::from(""));
        lines.push(launch_button("t", "Launch Virtual Tour", busy));
    } else {
        let set = view.filtered_set();
        match set.get(view.image_index()) {
            None => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "No images in this category",
                    Styles::placeholder(),
                )));
            }
            Some(asset) => match resolve_image(asset, &property.title) {
                ImageDisplay::Asset(asset) => {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        format!("▣ {}", asset.alt_text),
                        Styles::header(),
                    )));
                    lines.push(Line::from(Span::styled(asset.url.clone(), Styles::muted())));
                }
                ImageDisplay::Placeholder { caption } => {
                    let art_width = (inner.width as usize).saturating_sub(8).min(48);
                    let art_height = (inner.height as usize).saturating_sub(4).clamp(3, 7);
                    for row in placeholder_art(&caption, art_width, art_height) {
                        lines.push(Line::from(Span::styled(row, Styles::placeholder())));
                    }
                }
            },
        }

        if set.len() > 1 {
            lines.push(Line::from(vec![
                Span::styled("◀ ", Styles::button()),
                Span::raw(format!("{} / {}", view.image_index() + 1, set.len())),
                Span::styled(" ▶", Styles::button()),
            ]));
        }

        match view.media_mode() {
            MediaMode::Drone => {
                lines.push(Line::from(""));
                lines.push(launch_button("d", "Play Drone Footage", busy));
            }
            MediaMode::Floor => {
                if let Some(reference) = property.floor_plan() {
                    lines.push(Line::from(Span::styled(
                        format!("Floor plan: {}", reference),
                        Styles::muted(),
                    )));
                }
            }
            MediaMode::Gallery | MediaMode::Virtual => {}
        }
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(panel, inner);
}

fn launch_button<'a>(key: &'a str, label: &'a str, disabled: bool) -> Line<'a> {
    let style = if disabled {
        Styles::button_disabled()
    } else {
        Styles::button()
    };
    Line::from(Span::styled(format!("[ {}: {} ]", key, label), style))
}

fn render_description(f: &mut Frame, property: &PropertyRecord, area: Rect) {
    let mut lines = vec![Line::from(property.description.clone())];
    if !property.features.is_empty() {
        let features: Vec<String> = property
            .features
            .iter()
            .map(|feature| format!("• {}", feature))
            .collect();
        lines.push(Line::from(Span::styled(features.join("   "), Styles::muted())));
    }
    let description = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(description, area);
}

fn help_text(view: &ViewState) -> String {
    let mut parts = vec!["Esc: Close"];
    if view.shows_navigation() {
        parts.push("←/→: Images");
    }
    parts.push("1-4: Media");
    match view.media_mode() {
        MediaMode::Virtual => parts.push("t: Tour"),
        MediaMode::Drone => parts.push("d: Drone"),
        _ => {}
    }
    parts.push("c: Contact");
    parts.join(" | ")
}
