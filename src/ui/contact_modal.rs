// Contact Modal
// Inquiry form with four fields and the send button

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{Catalog, ContactField, ContactForm, ViewState};
use crate::utilities::wrap_text;
use super::popup::render_modal_frame;
use super::Styles;

const CURSOR: &str = "▏";

fn field_title(field: ContactField) -> String {
    if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    }
}

/// Title names the listing the draft is about, even when opened from the list
fn modal_title(view: &ViewState, catalog: &Catalog) -> String {
    let form = view.contact_form();
    let title = catalog
        .get(&form.property_id)
        .or_else(|| view.active_property())
        .map(|property| property.title.as_str());
    match title {
        Some(title) => format!("Contact Agent: {}", title),
        None => "Contact Agent".to_string(),
    }
}

/// Render the contact modal over whatever is below it
pub fn render_contact_modal(
    f: &mut Frame,
    area: Rect,
    view: &ViewState,
    catalog: &Catalog,
    focused: ContactField,
) {
    let title = modal_title(view, catalog);

    let inner = render_modal_frame(f, area, &title, 64, 80);
    if inner.width < 10 || inner.height < 12 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Send button
            Constraint::Length(1), // Key help
        ])
        .split(inner);

    let form = view.contact_form();
    for (idx, field) in ContactField::ALL.into_iter().enumerate() {
        render_field(f, form, field, field == focused, chunks[idx]);
    }

    let button_style = if view.is_busy() {
        Styles::button_disabled()
    } else {
        Styles::button()
    };
    let button = Paragraph::new(Line::from(Span::styled("[ Enter: Send Inquiry ]", button_style)))
        .alignment(Alignment::Center);
    f.render_widget(button, chunks[4]);

    let help = Paragraph::new("Tab/Shift-Tab: Field | Esc: Cancel | * required").style(Styles::footer());
    f.render_widget(help, chunks[5]);
}

fn render_field(f: &mut Frame, form: &ContactForm, field: ContactField, focused: bool, area: Rect) {
    let style = if focused {
        Styles::field_focused()
    } else {
        Styles::field_unfocused()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(field_title(field), style));
    let inner = block.inner(area);

    let mut value = form.field(field).to_string();
    if focused {
        value.push_str(CURSOR);
    }

    let width = inner.width.max(1) as usize;
    let height = inner.height.max(1) as usize;
    let lines: Vec<Line> = if field == ContactField::Message {
        // Keep the tail in view while typing
        let wrapped = wrap_text(&value, width);
        let skip = wrapped.len().saturating_sub(height);
        wrapped.into_iter().skip(skip).map(Line::from).collect()
    } else {
        let count = value.chars().count();
        let visible: String = value.chars().skip(count.saturating_sub(width)).collect();
        vec![Line::from(visible)]
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    #[test]
    fn test_title_from_draft_property() {
        let catalog = Catalog::builtin();
        let mut view = ViewState::new();
        assert_eq!(modal_title(&view, &catalog), "Contact Agent");

        let land = catalog.get("prop-002").unwrap().clone();
        view.apply(Action::OpenContact(land)).unwrap();
        assert!(!view.is_detail_open());
        assert_eq!(
            modal_title(&view, &catalog),
            "Contact Agent: Prime Agricultural Land"
        );
    }

    #[test]
    fn test_field_title_marks_required() {
        assert_eq!(field_title(ContactField::Name), " Name * ");
        assert_eq!(field_title(ContactField::Phone), " Phone ");
    }
}
