// UI module
// TUI components and views for the listing gallery

pub mod app_view;
pub mod contact_modal;
pub mod detail_modal;
pub mod popup;
pub mod property_list;
pub mod styles;
pub mod toast;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;

use crate::core::{Action, App, AppEvent, EventHandler};

pub use app_view::render_app;
pub use contact_modal::render_contact_modal;
pub use detail_modal::render_detail_modal;
pub use popup::{render_dim_background, render_loading_overlay, render_modal_frame};
pub use property_list::{render_property_list, render_property_summary};
pub use styles::Styles;
pub use toast::render_toasts;

/// Run the main application event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = app.config.ui.tick_rate;
    let mouse_enabled = app.config.ui.mouse_enabled;

    loop {
        // Drain finished tasks and expire notices before drawing
        app.on_tick();

        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(tick_rate)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event, app.input_context(), mouse_enabled);

            handle_event(app, app_event);
        }

        // Check if we should quit
        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::SelectPrevious => app.select_previous(),
        AppEvent::SelectNext => app.select_next(),
        AppEvent::OpenSelected => app.open_selected(),
        AppEvent::Contact => app.open_contact(),
        AppEvent::Back => app.back(),
        AppEvent::PrevImage => {
            app.dispatch(Action::PrevImage);
        }
        AppEvent::NextImage => {
            app.dispatch(Action::NextImage);
        }
        AppEvent::SelectModeTab(tab) => app.select_mode_tab(tab),
        AppEvent::LaunchTour => {
            app.dispatch(Action::LaunchVirtualTour);
        }
        AppEvent::LaunchDrone => {
            app.dispatch(Action::LaunchDroneFootage);
        }
        AppEvent::FocusNextField => app.focus_next_field(),
        AppEvent::FocusPrevField => app.focus_prev_field(),
        AppEvent::Input(c) => app.type_char(c),
        AppEvent::Backspace => app.backspace(),
        AppEvent::Submit => {
            app.dispatch(Action::SubmitContact);
        }
        AppEvent::None => {}
    }
}
