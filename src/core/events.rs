// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::app::InputContext;

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move listing selection up
    SelectPrevious,

    /// Move listing selection down
    SelectNext,

    /// Open the detail modal for the selected listing
    OpenSelected,

    /// Start the contact flow for the selected or open listing
    Contact,

    /// Close the topmost modal
    Back,

    /// Previous image in the current media set
    PrevImage,

    /// Next image in the current media set
    NextImage,

    /// Switch to the n-th offered media tab (0-based)
    SelectModeTab(usize),

    /// Launch the virtual tour
    LaunchTour,

    /// Launch the drone footage
    LaunchDrone,

    /// Focus the next contact field
    FocusNextField,

    /// Focus the previous contact field
    FocusPrevField,

    /// Type a character into the focused field
    Input(char),

    /// Delete the last character of the focused field
    Backspace,

    /// Submit the contact form
    Submit,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event for the given context
    pub fn handle(event: Event, context: InputContext, mouse_enabled: bool) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, context),
            Event::Mouse(mouse) if mouse_enabled => Self::handle_mouse(mouse, context),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent, context: InputContext) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return AppEvent::Quit;
        }

        match context {
            // The loading overlay swallows everything else
            InputContext::Busy => AppEvent::None,
            InputContext::Contact => Self::contact_key(key, ctrl),
            InputContext::Detail => Self::detail_key(key),
            InputContext::Browse => Self::browse_key(key),
        }
    }

    fn browse_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Up | KeyCode::Char('k') => AppEvent::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::SelectNext,
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::OpenSelected,
            KeyCode::Char('c') => AppEvent::Contact,
            _ => AppEvent::None,
        }
    }

    fn detail_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => AppEvent::Back,
            KeyCode::Left | KeyCode::Char('h') => AppEvent::PrevImage,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::NextImage,
            KeyCode::Char(c @ '1'..='4') => AppEvent::SelectModeTab(c as usize - '1' as usize),
            KeyCode::Char('t') => AppEvent::LaunchTour,
            KeyCode::Char('d') => AppEvent::LaunchDrone,
            KeyCode::Char('c') => AppEvent::Contact,
            _ => AppEvent::None,
        }
    }

    fn contact_key(key: KeyEvent, ctrl: bool) -> AppEvent {
        match key.code {
            KeyCode::Esc => AppEvent::Back,
            KeyCode::Tab | KeyCode::Down => AppEvent::FocusNextField,
            KeyCode::BackTab | KeyCode::Up => AppEvent::FocusPrevField,
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Char(c) if !ctrl => AppEvent::Input(c),
            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent, context: InputContext) -> AppEvent {
        match (context, mouse.kind) {
            (InputContext::Browse, MouseEventKind::ScrollUp) => AppEvent::SelectPrevious,
            (InputContext::Browse, MouseEventKind::ScrollDown) => AppEvent::SelectNext,
            (InputContext::Detail, MouseEventKind::ScrollUp) => AppEvent::PrevImage,
            (InputContext::Detail, MouseEventKind::ScrollDown) => AppEvent::NextImage,
            _ => AppEvent::None,
        }
    }
}
