use editable_profile_core::{AppError, AppResult};
use editable_profile_domain::FormState;
use tracing::{info, warn};

use super::{FormMode, FormPhase, ProfileFormController};

impl ProfileFormController {
    /// Fetches both reference catalogs, seeds the form and renders it.
    ///
    /// Both fetches run concurrently and are joined before the session becomes
    /// ready. A failed fetch leaves its catalog absent and is reported through
    /// the view as a general notice; it never aborts the session. A session
    /// can be loaded only once.
    pub async fn load(&mut self) -> AppResult<()> {
        if self.phase != FormPhase::Idle {
            return Err(AppError::Conflict(format!(
                "profile form session is already {}",
                self.phase.as_str()
            )));
        }
        self.phase = FormPhase::Loading;

        let (attributes, locations) = tokio::join!(
            self.reference_fetcher.fetch_attributes(),
            self.reference_fetcher.fetch_locations()
        );

        self.attributes = match attributes {
            Ok(catalog) => Some(catalog),
            Err(error) => {
                warn!(
                    session_id = %self.session_id,
                    error = %error,
                    "failed to load attribute catalog"
                );
                None
            }
        };
        self.locations = match locations {
            Ok(catalog) => Some(catalog),
            Err(error) => {
                warn!(
                    session_id = %self.session_id,
                    error = %error,
                    "failed to load location catalog"
                );
                None
            }
        };

        self.state = self.seed_state().await;
        self.phase = FormPhase::Ready;

        info!(
            session_id = %self.session_id,
            mode = ?self.mode,
            has_attributes = self.attributes.is_some(),
            has_locations = self.locations.is_some(),
            "profile form ready"
        );

        self.view.render(&self.state.all());
        if let Some(message) = self.data_load_notice() {
            self.view.show_general_error(message);
        }

        Ok(())
    }

    async fn seed_state(&self) -> FormState {
        if self.mode == FormMode::Register {
            return FormState::with_defaults();
        }

        match self.profile_store.load_profile().await {
            Ok(Some(profile)) => FormState::from_profile(&profile),
            Ok(None) => FormState::with_defaults(),
            Err(error) => {
                warn!(
                    session_id = %self.session_id,
                    error = %error,
                    "failed to read persisted profile, starting empty"
                );
                FormState::with_defaults()
            }
        }
    }

    fn data_load_notice(&self) -> Option<&'static str> {
        match (self.attributes.is_some(), self.locations.is_some()) {
            (true, true) => None,
            (false, true) => Some("Could not load profile options"),
            (true, false) => Some("Could not load locations"),
            (false, false) => Some("Could not load reference data"),
        }
    }
}
