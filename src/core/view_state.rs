// View State Machine
// Selection, media mode, image cursor, modals and the busy flag, driven by actions

use std::sync::Arc;

use super::catalog::{MediaAsset, PropertyRecord};
use super::contact::{ContactField, ContactForm};
use super::media::{available_modes, filtered_set, MediaMode};
use crate::error::{SubmitError, TransitionError};
use crate::operations::{SimulatedTask, TaskKind, TaskOutcome};

/// Confirmation shown after a successful submission
pub const SUBMIT_CONFIRMATION: &str =
    "Thank you for your inquiry! We will get back to you shortly.";

/// A user or task-completion event the view state reacts to
#[derive(Debug, Clone)]
pub enum Action {
    OpenDetails(Arc<PropertyRecord>),
    CloseDetails,
    SetMediaMode(MediaMode),
    NextImage,
    PrevImage,
    OpenContact(Arc<PropertyRecord>),
    CloseContact,
    UpdateContactField(ContactField, String),
    LaunchVirtualTour,
    LaunchDroneFootage,
    SubmitContact,
    TaskFinished(TaskOutcome),
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }
}

/// Side effect a transition asks the host to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start a simulated asynchronous task
    Spawn(SimulatedTask),
    /// Open a reference in a new navigation context
    OpenExternal(String),
    /// Show a notice
    Notify(Notice),
}

/// Session-local view state.
///
/// All changes go through [`ViewState::apply`]. A rejected action returns an
/// error and leaves every field as it was.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_property: Option<Arc<PropertyRecord>>,
    media_mode: MediaMode,
    image_index: usize,
    contact_open: bool,
    contact_form: ContactForm,
    in_flight: Option<TaskKind>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_property(&self) -> Option<&Arc<PropertyRecord>> {
        self.active_property.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.active_property.is_some()
    }

    pub fn media_mode(&self) -> MediaMode {
        self.media_mode
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn is_contact_open(&self) -> bool {
        self.contact_open
    }

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact_form
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<TaskKind> {
        self.in_flight
    }

    /// Images for the active property and mode. Derived on every call.
    pub fn filtered_set(&self) -> Vec<&MediaAsset> {
        match &self.active_property {
            Some(property) => filtered_set(property, self.media_mode),
            None => Vec::new(),
        }
    }

    pub fn current_image(&self) -> Option<&MediaAsset> {
        self.filtered_set().get(self.image_index).copied()
    }

    /// Prev/next controls and dots only appear for more than one image
    pub fn shows_navigation(&self) -> bool {
        self.filtered_set().len() > 1
    }

    pub fn available_modes(&self) -> Vec<MediaMode> {
        self.active_property
            .as_deref()
            .map(available_modes)
            .unwrap_or_default()
    }

    /// Apply one action
    pub fn apply(&mut self, action: Action) -> Result<Vec<Effect>, TransitionError> {
        match action {
            Action::OpenDetails(property) => {
                tracing::info!(property = %property.id, "Opening details");
                self.active_property = Some(property);
                self.media_mode = MediaMode::Gallery;
                self.image_index = 0;
                Ok(Vec::new())
            }
            Action::CloseDetails => {
                self.ensure_not_submitting()?;
                let property = self
                    .active_property
                    .take()
                    .ok_or(TransitionError::NoActiveProperty)?;
                tracing::info!(property = %property.id, "Closing details");
                self.media_mode = MediaMode::Gallery;
                self.image_index = 0;
                self.close_contact();
                Ok(Vec::new())
            }
            Action::SetMediaMode(mode) => {
                let property = self
                    .active_property
                    .as_ref()
                    .ok_or(TransitionError::NoActiveProperty)?;
                if !mode.is_available_for(property) {
                    return Err(TransitionError::ModeUnavailable(mode));
                }
                tracing::debug!(property = %property.id, %mode, "Switching media mode");
                self.media_mode = mode;
                self.image_index = 0;
                Ok(Vec::new())
            }
            Action::NextImage => self.step_image(1),
            Action::PrevImage => self.step_image(-1),
            Action::OpenContact(property) => {
                self.ensure_not_submitting()?;
                tracing::info!(property = %property.id, "Opening contact form");
                self.contact_form = ContactForm::for_property(&property);
                self.contact_open = true;
                Ok(Vec::new())
            }
            Action::CloseContact => {
                self.ensure_not_submitting()?;
                self.close_contact();
                Ok(Vec::new())
            }
            Action::UpdateContactField(field, value) => {
                if !self.contact_open {
                    return Err(TransitionError::ContactNotOpen);
                }
                self.ensure_not_submitting()?;
                self.contact_form.set_field(field, value);
                Ok(Vec::new())
            }
            Action::LaunchVirtualTour => {
                let reference = self.launch_reference(MediaMode::Virtual)?;
                Ok(self.start(SimulatedTask::LaunchTour { reference }))
            }
            Action::LaunchDroneFootage => {
                let reference = self.launch_reference(MediaMode::Drone)?;
                Ok(self.start(SimulatedTask::LaunchDrone { reference }))
            }
            Action::SubmitContact => {
                if self.is_busy() {
                    return Err(TransitionError::Busy);
                }
                if !self.contact_open {
                    return Err(TransitionError::ContactNotOpen);
                }
                let missing = self.contact_form.missing_fields();
                if !missing.is_empty() {
                    return Err(TransitionError::MissingFields(missing));
                }
                let payload = self.contact_form.clone();
                Ok(self.start(SimulatedTask::SubmitContact { payload }))
            }
            Action::TaskFinished(outcome) => Ok(self.finish(outcome)),
        }
    }

    /// The draft belongs to the pending submission until it finishes
    fn ensure_not_submitting(&self) -> Result<(), TransitionError> {
        if self.in_flight == Some(TaskKind::ContactSubmit) {
            return Err(TransitionError::Busy);
        }
        Ok(())
    }

    fn close_contact(&mut self) {
        if self.contact_open {
            tracing::info!(property = %self.contact_form.property_id, "Closing contact form");
        }
        self.contact_open = false;
        self.contact_form = ContactForm::default();
    }

    fn step_image(&mut self, delta: isize) -> Result<Vec<Effect>, TransitionError> {
        if self.active_property.is_none() {
            return Err(TransitionError::NoActiveProperty);
        }
        let len = self.filtered_set().len();
        if len == 0 {
            return Ok(Vec::new());
        }
        let len = len as isize;
        let index = (self.image_index as isize + delta).rem_euclid(len);
        self.image_index = index as usize;
        tracing::debug!(index = self.image_index, len, "Image cursor moved");
        Ok(Vec::new())
    }

    /// Reference to launch for a virtual tour or drone footage
    fn launch_reference(&self, mode: MediaMode) -> Result<String, TransitionError> {
        if self.is_busy() {
            return Err(TransitionError::Busy);
        }
        let property = self
            .active_property
            .as_ref()
            .ok_or(TransitionError::NoActiveProperty)?;
        let reference = match mode {
            MediaMode::Virtual => property.virtual_tour(),
            MediaMode::Drone => property.drone_footage(),
            MediaMode::Gallery | MediaMode::Floor => None,
        };
        reference
            .map(str::to_string)
            .ok_or(TransitionError::ModeUnavailable(mode))
    }

    fn start(&mut self, task: SimulatedTask) -> Vec<Effect> {
        let kind = task.kind();
        tracing::info!(?kind, "Starting simulated task");
        self.in_flight = Some(kind);
        vec![Effect::Spawn(task)]
    }

    fn finish(&mut self, outcome: TaskOutcome) -> Vec<Effect> {
        if self.in_flight.take().is_none() {
            tracing::warn!(?outcome, "Task finished with nothing in flight");
        }

        match outcome {
            TaskOutcome::TourReady { reference } | TaskOutcome::DroneReady { reference } => {
                // Fires even if the detail modal was closed meanwhile
                tracing::info!(%reference, detail_open = self.is_detail_open(), "Launch ready");
                vec![Effect::OpenExternal(reference)]
            }
            TaskOutcome::Submitted(Ok(())) => {
                tracing::info!("Contact form submitted");
                self.close_contact();
                vec![Effect::Notify(Notice::success(SUBMIT_CONFIRMATION))]
            }
            TaskOutcome::Submitted(Err(err)) => {
                tracing::warn!(error = %err, "Contact form submission failed");
                let message = match &err {
                    SubmitError::Network(_) => {
                        format!("Could not send your inquiry ({}). Please try again.", err)
                    }
                    SubmitError::Rejected(reason) => {
                        format!("Your inquiry was not accepted: {}", reason)
                    }
                };
                vec![Effect::Notify(Notice::error(message))]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;
    use proptest::prelude::*;

    fn property(id: &str) -> Arc<PropertyRecord> {
        Catalog::builtin().get(id).unwrap().clone()
    }

    fn opened(id: &str) -> ViewState {
        let mut state = ViewState::new();
        state.apply(Action::OpenDetails(property(id))).unwrap();
        state
    }

    fn filled_contact(id: &str) -> ViewState {
        let mut state = opened(id);
        state.apply(Action::OpenContact(property(id))).unwrap();
        state
            .apply(Action::UpdateContactField(ContactField::Name, "Juan".into()))
            .unwrap();
        state
            .apply(Action::UpdateContactField(ContactField::Email, "juan@example.com".into()))
            .unwrap();
        state
    }

    #[test]
    fn test_starts_closed() {
        let state = ViewState::new();
        assert!(!state.is_detail_open());
        assert!(!state.is_contact_open());
        assert!(!state.is_busy());
        assert!(state.contact_form().is_empty());
        assert!(state.filtered_set().is_empty());
    }

    #[test]
    fn test_gallery_cycle_returns_to_start() {
        let mut state = opened("prop-001");
        assert_eq!(state.media_mode(), MediaMode::Gallery);
        assert_eq!(state.image_index(), 0);
        assert_eq!(state.filtered_set().len(), 5);
        assert!(state.shows_navigation());

        for expected in [1, 2, 3, 4, 0] {
            state.apply(Action::NextImage).unwrap();
            assert_eq!(state.image_index(), expected);
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut state = opened("prop-001");
        state.apply(Action::PrevImage).unwrap();
        assert_eq!(state.image_index(), 4);
        assert_eq!(state.current_image().unwrap().alt_text, "Back garden");
    }

    #[test]
    fn test_single_drone_image_has_no_navigation() {
        let mut state = opened("prop-001");
        state.apply(Action::NextImage).unwrap();
        state.apply(Action::SetMediaMode(MediaMode::Drone)).unwrap();

        assert_eq!(state.image_index(), 0);
        assert_eq!(state.filtered_set().len(), 1);
        assert!(!state.shows_navigation());
        assert_eq!(state.current_image().unwrap().alt_text, "Aerial view of the lot");

        state.apply(Action::NextImage).unwrap();
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn test_unavailable_mode_is_rejected() {
        let mut state = opened("prop-002");
        state.apply(Action::NextImage).unwrap();
        assert!(!state.available_modes().contains(&MediaMode::Virtual));

        let err = state.apply(Action::SetMediaMode(MediaMode::Virtual)).unwrap_err();
        assert_eq!(err, TransitionError::ModeUnavailable(MediaMode::Virtual));
        assert_eq!(state.media_mode(), MediaMode::Gallery);
        assert_eq!(state.image_index(), 1);
    }

    #[test]
    fn test_blank_reference_mode_is_rejected() {
        let mut state = opened("prop-003");
        let err = state.apply(Action::SetMediaMode(MediaMode::Floor)).unwrap_err();
        assert_eq!(err, TransitionError::ModeUnavailable(MediaMode::Floor));
    }

    #[test]
    fn test_mode_change_without_property() {
        let mut state = ViewState::new();
        assert_eq!(
            state.apply(Action::SetMediaMode(MediaMode::Gallery)),
            Err(TransitionError::NoActiveProperty)
        );
        assert_eq!(state.apply(Action::NextImage), Err(TransitionError::NoActiveProperty));
    }

    #[test]
    fn test_empty_set_navigation_is_noop() {
        let mut state = opened("prop-004");
        assert!(state.filtered_set().is_empty());
        assert!(!state.shows_navigation());
        state.apply(Action::NextImage).unwrap();
        state.apply(Action::PrevImage).unwrap();
        assert_eq!(state.image_index(), 0);
        assert!(state.current_image().is_none());
    }

    #[test]
    fn test_virtual_mode_has_no_images() {
        let mut state = opened("prop-001");
        state.apply(Action::SetMediaMode(MediaMode::Virtual)).unwrap();
        assert!(state.filtered_set().is_empty());
        state.apply(Action::NextImage).unwrap();
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn test_switching_property_resets_mode_and_index() {
        let mut state = opened("prop-001");
        state.apply(Action::SetMediaMode(MediaMode::Floor)).unwrap();
        state.apply(Action::SetMediaMode(MediaMode::Gallery)).unwrap();
        state.apply(Action::NextImage).unwrap();
        state.apply(Action::NextImage).unwrap();
        state.apply(Action::SetMediaMode(MediaMode::Drone)).unwrap();

        state.apply(Action::OpenDetails(property("prop-002"))).unwrap();
        assert_eq!(state.active_property().unwrap().id, "prop-002");
        assert_eq!(state.media_mode(), MediaMode::Gallery);
        assert_eq!(state.image_index(), 0);
    }

    #[test]
    fn test_closing_details_closes_contact() {
        let mut state = filled_contact("prop-001");
        state.apply(Action::CloseDetails).unwrap();
        assert!(!state.is_detail_open());
        assert!(!state.is_contact_open());
        assert!(state.contact_form().is_empty());
    }

    #[test]
    fn test_closing_contact_keeps_details() {
        let mut state = filled_contact("prop-001");
        state.apply(Action::NextImage).unwrap();
        state.apply(Action::CloseContact).unwrap();
        assert!(!state.is_contact_open());
        assert!(state.contact_form().is_empty());
        assert!(state.is_detail_open());
        assert_eq!(state.image_index(), 1);
    }

    #[test]
    fn test_contact_from_grid_without_details() {
        let mut state = ViewState::new();
        state.apply(Action::OpenContact(property("prop-003"))).unwrap();
        assert!(state.is_contact_open());
        assert!(!state.is_detail_open());
        assert_eq!(
            state.apply(Action::CloseDetails),
            Err(TransitionError::NoActiveProperty)
        );
        assert!(state.is_contact_open());
    }

    #[test]
    fn test_retriggering_contact_discards_draft() {
        let mut state = filled_contact("prop-001");
        state
            .apply(Action::UpdateContactField(ContactField::Phone, "0917".into()))
            .unwrap();
        state.apply(Action::OpenContact(property("prop-002"))).unwrap();

        let form = state.contact_form();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.phone, "");
        assert_eq!(form.property_id, "prop-002");
        assert_eq!(
            form.message,
            "I'm interested in Prime Agricultural Land located in Bantay, Ilocos Sur. Please provide more information."
        );
    }

    #[test]
    fn test_edit_requires_open_contact() {
        let mut state = ViewState::new();
        assert_eq!(
            state.apply(Action::UpdateContactField(ContactField::Name, "x".into())),
            Err(TransitionError::ContactNotOpen)
        );
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut state = filled_contact("prop-001");
        let effects = state.apply(Action::SubmitContact).unwrap();
        assert!(state.is_busy());
        assert_eq!(state.in_flight(), Some(TaskKind::ContactSubmit));
        match &effects[..] {
            [Effect::Spawn(SimulatedTask::SubmitContact { payload })] => {
                assert_eq!(payload.name, "Juan");
                assert_eq!(payload.property_id, "prop-001");
            }
            other => panic!("unexpected effects: {:?}", other),
        }

        // Submit control is disabled while busy
        assert_eq!(state.apply(Action::SubmitContact), Err(TransitionError::Busy));
        assert_eq!(
            state.apply(Action::UpdateContactField(ContactField::Name, "x".into())),
            Err(TransitionError::Busy)
        );

        let effects = state
            .apply(Action::TaskFinished(TaskOutcome::Submitted(Ok(()))))
            .unwrap();
        assert!(!state.is_busy());
        assert!(!state.is_contact_open());
        assert!(state.contact_form().is_empty());
        assert_eq!(effects, vec![Effect::Notify(Notice::success(SUBMIT_CONFIRMATION))]);
        assert!(state.is_detail_open());
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut state = filled_contact("prop-002");
        state.apply(Action::SubmitContact).unwrap();
        let before = state.contact_form().clone();

        let effects = state
            .apply(Action::TaskFinished(TaskOutcome::Submitted(Err(
                SubmitError::Network("timeout".into()),
            ))))
            .unwrap();

        assert!(!state.is_busy());
        assert!(state.is_contact_open());
        assert_eq!(state.contact_form(), &before);
        assert!(matches!(
            &effects[..],
            [Effect::Notify(Notice { level: NoticeLevel::Error, .. })]
        ));

        // Retry is allowed again
        assert!(state.apply(Action::SubmitContact).is_ok());
    }

    #[test]
    fn test_rejected_submit_keeps_draft_with_reason() {
        let mut state = filled_contact("prop-001");
        state.apply(Action::SubmitContact).unwrap();

        let effects = state
            .apply(Action::TaskFinished(TaskOutcome::Submitted(Err(
                SubmitError::Rejected("listing sold".into()),
            ))))
            .unwrap();

        assert!(state.is_contact_open());
        assert_eq!(state.contact_form().name, "Juan");
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::error("Your inquiry was not accepted: listing sold"))]
        );
    }

    #[test]
    fn test_contact_modal_locked_during_submit() {
        let mut state = filled_contact("prop-001");
        state.apply(Action::SubmitContact).unwrap();
        let before = state.contact_form().clone();

        assert_eq!(
            state.apply(Action::OpenContact(property("prop-002"))),
            Err(TransitionError::Busy)
        );
        assert_eq!(state.apply(Action::CloseContact), Err(TransitionError::Busy));
        assert_eq!(state.apply(Action::CloseDetails), Err(TransitionError::Busy));
        assert!(state.is_contact_open());
        assert!(state.is_detail_open());
        assert_eq!(state.contact_form(), &before);
    }

    #[test]
    fn test_failed_submit_after_close_attempt_keeps_draft() {
        let mut state = filled_contact("prop-001");
        state.apply(Action::SubmitContact).unwrap();
        assert!(state.apply(Action::CloseContact).is_err());

        state
            .apply(Action::TaskFinished(TaskOutcome::Submitted(Err(
                SubmitError::Network("offline".into()),
            ))))
            .unwrap();
        assert!(state.is_contact_open());
        assert_eq!(state.contact_form().name, "Juan");
        assert_eq!(state.contact_form().property_id, "prop-001");
    }

    #[test]
    fn test_launch_in_flight_does_not_lock_contact() {
        let mut state = opened("prop-001");
        state.apply(Action::LaunchVirtualTour).unwrap();
        state.apply(Action::OpenContact(property("prop-001"))).unwrap();
        state.apply(Action::CloseContact).unwrap();
        state.apply(Action::CloseDetails).unwrap();
        assert!(state.is_busy());
    }

    #[test]
    fn test_submit_requires_fields() {
        let mut state = opened("prop-001");
        assert_eq!(state.apply(Action::SubmitContact), Err(TransitionError::ContactNotOpen));

        state.apply(Action::OpenContact(property("prop-001"))).unwrap();
        assert_eq!(
            state.apply(Action::SubmitContact),
            Err(TransitionError::MissingFields(vec![ContactField::Name, ContactField::Email]))
        );
        assert!(!state.is_busy());
    }

    #[test]
    fn test_tour_launch_opens_reference_on_completion() {
        let mut state = opened("prop-001");
        let effects = state.apply(Action::LaunchVirtualTour).unwrap();
        assert!(state.is_busy());
        let reference = "https://tours.listing-gallery.example/prop-001".to_string();
        assert_eq!(
            effects,
            vec![Effect::Spawn(SimulatedTask::LaunchTour { reference: reference.clone() })]
        );

        assert_eq!(state.apply(Action::LaunchDroneFootage), Err(TransitionError::Busy));
        assert_eq!(state.apply(Action::LaunchVirtualTour), Err(TransitionError::Busy));

        let effects = state
            .apply(Action::TaskFinished(TaskOutcome::TourReady { reference: reference.clone() }))
            .unwrap();
        assert!(!state.is_busy());
        assert_eq!(effects, vec![Effect::OpenExternal(reference)]);
    }

    #[test]
    fn test_launch_completion_after_close_still_opens() {
        let mut state = opened("prop-002");
        state.apply(Action::LaunchDroneFootage).unwrap();
        state.apply(Action::CloseDetails).unwrap();

        let reference = "https://video.listing-gallery.example/prop-002/drone".to_string();
        let effects = state
            .apply(Action::TaskFinished(TaskOutcome::DroneReady { reference: reference.clone() }))
            .unwrap();
        assert_eq!(effects, vec![Effect::OpenExternal(reference)]);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_launch_without_reference() {
        let mut state = opened("prop-002");
        assert_eq!(
            state.apply(Action::LaunchVirtualTour),
            Err(TransitionError::ModeUnavailable(MediaMode::Virtual))
        );
        assert!(!state.is_busy());

        let mut closed = ViewState::new();
        assert_eq!(
            closed.apply(Action::LaunchDroneFootage),
            Err(TransitionError::NoActiveProperty)
        );
    }

    proptest! {
        #[test]
        fn navigation_is_cyclic(start in 0usize..5, forward in proptest::bool::ANY) {
            let mut state = opened("prop-001");
            for _ in 0..start {
                state.apply(Action::NextImage).unwrap();
            }
            let origin = state.image_index();
            let len = state.filtered_set().len();
            let step = if forward { Action::NextImage } else { Action::PrevImage };
            for _ in 0..len {
                state.apply(step.clone()).unwrap();
                prop_assert!(state.image_index() < len);
            }
            prop_assert_eq!(state.image_index(), origin);
        }

        #[test]
        fn mode_switch_always_resets_index(steps in 0usize..12) {
            let mut state = opened("prop-001");
            for _ in 0..steps {
                state.apply(Action::NextImage).unwrap();
            }
            for mode in state.available_modes() {
                state.apply(Action::SetMediaMode(mode)).unwrap();
                prop_assert_eq!(state.image_index(), 0);
            }
        }
    }
}
