// Application State
// Main application state: the view state plus the UI cursor, notices and collaborators

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;

use super::{Action, AppConfig, Catalog, ContactField, Effect, Notice, PropertyRecord, ViewState};
use crate::error::TransitionError;
use crate::operations::{ExternalOpener, TaskOutcome, TaskRunner};

/// Which surface receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Listing list, no modal open
    Browse,
    /// Detail modal on top
    Detail,
    /// Contact modal on top
    Contact,
    /// Loading overlay on top
    Busy,
}

/// A notice currently on screen
#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Main application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,

    /// Listings being browsed
    pub catalog: Catalog,

    /// Selection, modals and busy flag
    pub view: ViewState,

    /// Highlighted row in the listing list
    pub selected_index: usize,

    /// Focused field in the contact modal
    pub focused_field: ContactField,

    /// Toast notices, oldest first
    pub notices: Vec<ActiveNotice>,

    /// Frame counter for the spinner
    pub tick: u64,

    /// Whether the application should quit
    pub should_quit: bool,

    runner: TaskRunner,
    outcomes: UnboundedReceiver<TaskOutcome>,
    opener: Box<dyn ExternalOpener>,
}

impl App {
    /// Create a new application instance
    pub fn new(
        config: AppConfig,
        catalog: Catalog,
        runner: TaskRunner,
        outcomes: UnboundedReceiver<TaskOutcome>,
        opener: Box<dyn ExternalOpener>,
    ) -> Self {
        Self {
            config,
            catalog,
            view: ViewState::new(),
            selected_index: 0,
            focused_field: ContactField::Name,
            notices: Vec::new(),
            tick: 0,
            should_quit: false,
            runner,
            outcomes,
            opener,
        }
    }

    /// Topmost surface, which decides how keys are read
    pub fn input_context(&self) -> InputContext {
        if self.view.is_busy() {
            InputContext::Busy
        } else if self.view.is_contact_open() {
            InputContext::Contact
        } else if self.view.is_detail_open() {
            InputContext::Detail
        } else {
            InputContext::Browse
        }
    }

    /// Whether any modal or the overlay covers the list
    pub fn is_modal_visible(&self) -> bool {
        self.input_context() != InputContext::Browse
    }

    /// Get the highlighted listing
    pub fn selected_property(&self) -> Option<&Arc<PropertyRecord>> {
        self.catalog.get_index(self.selected_index)
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        let max = self.catalog.len().saturating_sub(1);
        if self.selected_index < max {
            self.selected_index += 1;
        }
    }

    /// Apply an action and perform its effects. Returns false if it was rejected.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match self.view.apply(action) {
            Ok(effects) => {
                for effect in effects {
                    self.perform(effect);
                }
                true
            }
            Err(err) => {
                self.reject(err);
                false
            }
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Spawn(task) => {
                self.runner.spawn(task);
            }
            Effect::OpenExternal(reference) => {
                if let Err(err) = self.opener.open(&reference) {
                    tracing::warn!(error = ?err, %reference, "Failed to open external reference");
                    self.push_notice(Notice::error(format!("Could not open {}", reference)));
                }
            }
            Effect::Notify(notice) => self.push_notice(notice),
        }
    }

    fn reject(&mut self, err: TransitionError) {
        tracing::warn!(error = %err, "Action rejected");
        if let TransitionError::MissingFields(_) = err {
            self.push_notice(Notice::error(format!("Cannot send yet: {}", err)));
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(ActiveNotice {
            notice,
            shown_at: Instant::now(),
        });
    }

    /// Feed finished tasks back into the view state
    pub fn poll_tasks(&mut self) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.dispatch(Action::TaskFinished(outcome));
        }
    }

    /// Drop notices older than the configured TTL
    pub fn expire_notices(&mut self, now: Instant) {
        let ttl = self.config.ui.toast_ttl;
        self.notices
            .retain(|n| now.saturating_duration_since(n.shown_at) < ttl);
    }

    /// Per-frame housekeeping
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.poll_tasks();
        self.expire_notices(Instant::now());
    }

    /// Open the detail modal for the highlighted listing
    pub fn open_selected(&mut self) {
        if let Some(property) = self.selected_property().cloned() {
            self.dispatch(Action::OpenDetails(property));
        }
    }

    /// Start the contact flow for the open listing, or the highlighted one
    pub fn open_contact(&mut self) {
        let property = self
            .view
            .active_property()
            .or_else(|| self.selected_property())
            .cloned();
        if let Some(property) = property {
            if self.dispatch(Action::OpenContact(property)) {
                self.focused_field = ContactField::Name;
            }
        }
    }

    /// Close the topmost modal
    pub fn back(&mut self) {
        if self.view.is_contact_open() {
            self.dispatch(Action::CloseContact);
        } else if self.view.is_detail_open() {
            self.dispatch(Action::CloseDetails);
        }
    }

    /// Switch to the n-th offered media tab
    pub fn select_mode_tab(&mut self, tab: usize) {
        if let Some(mode) = self.view.available_modes().get(tab).copied() {
            self.dispatch(Action::SetMediaMode(mode));
        }
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Append a character to the focused contact field
    pub fn type_char(&mut self, c: char) {
        let mut value = self.view.contact_form().field(self.focused_field).to_string();
        value.push(c);
        self.dispatch(Action::UpdateContactField(self.focused_field, value));
    }

    /// Remove the last character of the focused contact field
    pub fn backspace(&mut self) {
        let mut value = self.view.contact_form().field(self.focused_field).to_string();
        if value.pop().is_some() {
            self.dispatch(Action::UpdateContactField(self.focused_field, value));
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
