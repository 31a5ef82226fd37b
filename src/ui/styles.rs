// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::core::NoticeLevel;
use crate::utilities::hex_color;

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    // === List Items ===

    pub fn list_selected() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn list_normal() -> Style {
        Style::default()
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Modals ===

    /// Background behind modals
    pub fn dim_background() -> Style {
        Style::default().bg(hex_color(0x0A0A0A)).fg(hex_color(0x444444))
    }

    /// Modal panel background
    pub fn panel() -> Style {
        Style::default().bg(hex_color(0x141420)).fg(Color::White)
    }

    pub fn modal_border() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(hex_color(0x777777))
    }

    pub fn dot_active() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn dot_inactive() -> Style {
        Style::default().fg(hex_color(0x555555))
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(hex_color(0x888888))
            .add_modifier(Modifier::ITALIC)
    }

    // === Buttons / Fields ===

    pub fn button() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default()
            .fg(hex_color(0x555555))
            .add_modifier(Modifier::DIM)
    }

    pub fn field_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn field_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn spinner() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    // === Notices ===

    pub fn notice(level: NoticeLevel) -> Style {
        let fg = match level {
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Error => Color::Red,
            NoticeLevel::Info => Color::Cyan,
        };
        Style::default()
            .fg(fg)
            .bg(hex_color(0x0A0A0A))
            .add_modifier(Modifier::BOLD)
    }

    // === Border Styles ===

    pub fn border(dimmed: bool) -> Style {
        if dimmed {
            Style::default().fg(hex_color(0x222222))
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn title(dimmed: bool) -> Style {
        if dimmed {
            Style::default().fg(hex_color(0x444444))
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        }
    }
}
