//! Profile form session state machine.
//!
//! A controller serves exactly one form session: it is loaded once, mutated by
//! user events, and closed either by a successful submit or by dismissal.

use std::sync::Arc;

use editable_profile_core::{AppError, AppResult, SessionId};
use editable_profile_domain::{
    AttributeCatalog, FieldKind, FormElement, FormState, LocationCatalog,
};

use crate::profile_ports::{ImagePicker, PickerChoice, ProfileFormView, ProfileStore, ReferenceFetcher};

mod interaction;
mod loading;


/// How the form session seeds its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Starts from empty fields.
    Register,
    /// Starts from the persisted profile, or empty fields when none is stored.
    Edit,
}

/// Lifecycle phase of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Created, reference data not requested yet.
    Idle,
    /// Waiting for both reference fetches.
    Loading,
    /// Accepting user events.
    Ready,
    /// Submitted or dismissed.
    Closed,
}

impl FormPhase {
    /// Returns a stable value for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePicker {
    Choice(FieldKind),
    Date(FieldKind),
}

/// Controller driving one profile form session.
pub struct ProfileFormController {
    session_id: SessionId,
    mode: FormMode,
    reference_fetcher: Arc<dyn ReferenceFetcher>,
    profile_store: Arc<dyn ProfileStore>,
    image_picker: Arc<dyn ImagePicker>,
    view: Arc<dyn ProfileFormView>,
    phase: FormPhase,
    attributes: Option<AttributeCatalog>,
    locations: Option<LocationCatalog>,
    state: FormState,
    active_picker: Option<ActivePicker>,
}

impl ProfileFormController {
    /// Creates a controller for a new form session.
    #[must_use]
    pub fn new(
        reference_fetcher: Arc<dyn ReferenceFetcher>,
        profile_store: Arc<dyn ProfileStore>,
        image_picker: Arc<dyn ImagePicker>,
        view: Arc<dyn ProfileFormView>,
        mode: FormMode,
    ) -> Self {
        Self {
            session_id: SessionId::new(),
            mode,
            reference_fetcher,
            profile_store,
            image_picker,
            view,
            phase: FormPhase::Idle,
            attributes: None,
            locations: None,
            state: FormState::new(),
            active_picker: None,
        }
    }

    /// Returns the session identifier used in log events.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns every element once the session is ready, `None` before that.
    #[must_use]
    pub fn elements(&self) -> Option<Vec<FormElement>> {
        (self.phase == FormPhase::Ready).then(|| self.state.all())
    }

    /// Returns the current element for one kind once the session is ready.
    #[must_use]
    pub fn element(&self, kind: FieldKind) -> Option<&FormElement> {
        if self.phase != FormPhase::Ready {
            return None;
        }
        self.state.get(kind)
    }

    fn ensure_ready(&self) -> AppResult<()> {
        match self.phase {
            FormPhase::Ready => Ok(()),
            FormPhase::Idle | FormPhase::Loading => Err(AppError::Conflict(
                "profile form has not finished loading".to_owned(),
            )),
            FormPhase::Closed => Err(AppError::Conflict("profile form is closed".to_owned())),
        }
    }

    fn placeholder(&self, kind: FieldKind) -> String {
        self.state
            .get(kind)
            .map(FormElement::placeholder)
            .unwrap_or_else(|| kind.default_placeholder())
            .to_owned()
    }

    fn open_picker(&mut self, picker: ActivePicker, choices: &[PickerChoice]) {
        if self.active_picker.is_some() {
            self.view.dismiss_picker();
        }

        match picker {
            ActivePicker::Choice(kind) => self.view.show_picker(kind, choices),
            ActivePicker::Date(kind) => self.view.show_date_picker(kind),
        }
        self.active_picker = Some(picker);
    }

    fn dismiss_picker(&mut self) {
        self.active_picker = None;
        self.view.dismiss_picker();
    }

    fn upsert_and_render(&mut self, element: FormElement) {
        self.view.render_one(&element);
        self.state.upsert(element);
    }
}
