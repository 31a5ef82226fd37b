// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{App, InputContext};
use super::{
    render_contact_modal, render_detail_modal, render_dim_background, render_loading_overlay,
    render_property_list, render_property_summary, render_toasts, Styles,
};

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let dimmed = app.is_modal_visible();

    render_header(f, app, chunks[0]);
    render_main_content(f, app, dimmed, chunks[1]);
    render_footer(f, app, chunks[2]);

    // Modals stack above the base layout, contact above detail
    if app.view.is_detail_open() || app.view.is_contact_open() {
        render_dim_background(f, area);
    }
    if app.view.is_detail_open() {
        render_detail_modal(f, area, &app.view);
    }
    if app.view.is_contact_open() {
        render_contact_modal(f, area, &app.view, &app.catalog, app.focused_field);
    }

    render_toasts(f, area, &app.notices);

    if let Some(kind) = app.view.in_flight() {
        render_loading_overlay(f, area, kind.label(), app.tick);
    }
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(app.config.shell.title.clone(), Styles::header()),
        Span::styled(
            format!("  {} listings", app.catalog.len()),
            Styles::muted(),
        ),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the main content area (list + summary)
fn render_main_content(f: &mut Frame, app: &App, dimmed: bool, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_property_list(f, &app.catalog, app.selected_index, dimmed, main_chunks[0]);
    render_property_summary(
        f,
        app.selected_property().map(|p| p.as_ref()),
        dimmed,
        main_chunks[1],
    );
}

/// Key help for the topmost surface
pub fn footer_help(app: &App) -> String {
    match app.input_context() {
        InputContext::Browse => {
            if app.config.shell.bindings.is_empty() {
                "q: Quit | ↑/↓: Select | Enter/Space: Details | c: Contact".to_string()
            } else {
                app.config
                    .shell
                    .bindings
                    .iter()
                    .map(|b| format!("{}: {}", b.key, b.description))
                    .collect::<Vec<_>>()
                    .join(" | ")
            }
        }
        InputContext::Detail => {
            "Esc: Close | ←/→: Images | 1-4: Media | t: Tour | d: Drone | c: Contact".to_string()
        }
        InputContext::Contact => {
            "Esc: Cancel | Tab/Shift-Tab: Field | Enter: Send | Backspace: Delete".to_string()
        }
        InputContext::Busy => "Please wait... | Ctrl-C: Quit".to_string(),
    }
}

/// Render the footer bar
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.is_modal_visible() {
        &app.config.shell.modal_status_text
    } else {
        &app.config.shell.status_text
    };

    let line = Line::from(vec![
        Span::styled(format!("{}  ", status), Styles::muted()),
        Span::styled(footer_help(app), Styles::footer()),
    ]);
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
