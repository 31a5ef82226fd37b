// Property List Component
// Renders the listing list and the summary of the highlighted listing

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::{available_modes, Catalog, PropertyRecord};
use super::Styles;

/// Render the listing list
pub fn render_property_list(
    f: &mut Frame,
    catalog: &Catalog,
    selected_index: usize,
    dimmed: bool,
    area: Rect,
) {
    let items: Vec<ListItem> = catalog
        .iter()
        .enumerate()
        .map(|(idx, property)| {
            let style = if idx == selected_index && !dimmed {
                Styles::list_selected()
            } else {
                Styles::list_normal()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(property.title.clone(), style),
                    Span::raw("  "),
                    Span::styled(property.price.clone(), Styles::price()),
                ]),
                Line::from(Span::styled(
                    format!("  {} · {}", property.property_type, property.location),
                    Styles::muted(),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(dimmed))
            .title(Span::styled(
                format!(" Listings ({}) ", catalog.len()),
                Styles::title(dimmed),
            )),
    );

    let mut list_state = ListState::default();
    if !catalog.is_empty() {
        list_state.select(Some(selected_index));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render the summary panel for the highlighted listing
pub fn render_property_summary(
    f: &mut Frame,
    property: Option<&PropertyRecord>,
    dimmed: bool,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(dimmed))
        .title(Span::styled(" Overview ", Styles::title(dimmed)));

    let Some(property) = property else {
        let empty = Paragraph::new("No listings to show").block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(property.title.clone(), Styles::header())),
        Line::from(format!("{} · {}", property.property_type, property.location)),
        Line::from(Span::styled(property.price.clone(), Styles::price())),
    ];

    let mut facts = Vec::new();
    if !property.area.is_empty() {
        facts.push(property.area.clone());
    }
    let rooms = property.rooms_summary();
    if !rooms.is_empty() {
        facts.push(rooms);
    }
    if !facts.is_empty() {
        lines.push(Line::from(facts.join(" · ")));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(property.description.clone()));
    lines.push(Line::from(""));

    let media: Vec<&str> = available_modes(property).iter().map(|m| m.label()).collect();
    lines.push(Line::from(Span::styled(
        format!("Media: {}", media.join(", ")),
        Styles::muted(),
    )));
    let photos = match property.cover_image() {
        Some(cover) => format!("{} photo(s), cover: {}", property.images.len(), cover.alt_text),
        None => "No photos yet".to_string(),
    };
    lines.push(Line::from(Span::styled(photos, Styles::muted())));
    lines.push(Line::from(""));
    lines.push(Line::from("Enter: View details   c: Contact agent"));

    let summary = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(summary, area);
}
