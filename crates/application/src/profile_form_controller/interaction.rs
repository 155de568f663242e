use chrono::{DateTime, Utc};
use editable_profile_core::{AppError, AppResult};
use editable_profile_domain::{FieldContent, FieldKind, FormElement, create_profile};
use tracing::{debug, info, warn};

use super::{ActivePicker, FormPhase, ProfileFormController};
use crate::profile_ports::PickerChoice;

impl ProfileFormController {
    /// Handles a user interaction with one field.
    ///
    /// `raw_text` is the text currently typed into the control; it is ignored
    /// by fields driven by pickers, except the location field which uses it as
    /// a city prefix query.
    pub async fn interact(&mut self, kind: FieldKind, raw_text: Option<String>) -> AppResult<()> {
        self.ensure_ready()?;
        debug!(session_id = %self.session_id, field = kind.as_str(), "field interaction");

        match kind {
            FieldKind::DisplayName
            | FieldKind::RealName
            | FieldKind::Height
            | FieldKind::Occupation
            | FieldKind::AboutMe => self.edit_text(kind, raw_text),
            FieldKind::Location => self.query_locations(raw_text.unwrap_or_default().as_str()),
            FieldKind::Gender
            | FieldKind::Ethnicity
            | FieldKind::Religion
            | FieldKind::Figure
            | FieldKind::MaritalStatus => self.show_attribute_picker(kind),
            FieldKind::BirthDay => self.open_picker(ActivePicker::Date(kind), &[]),
            FieldKind::ProfileImage | FieldKind::SecondaryImage => self.pick_image(kind).await,
            FieldKind::ImageRoleSwitch => self.toggle_image_roles(),
            FieldKind::DoneButton => self.submit().await?,
        }

        Ok(())
    }

    /// Applies a single-choice picker selection.
    ///
    /// The choice id is resolved against the session's catalog; the picker's
    /// display title is never trusted.
    pub fn select_choice(&mut self, kind: FieldKind, choice_id: &str) -> AppResult<()> {
        self.ensure_ready()?;
        let placeholder = self.placeholder(kind);

        let element = if kind == FieldKind::Location {
            let location = self
                .locations
                .as_ref()
                .zip(choice_id.parse::<usize>().ok())
                .and_then(|(catalog, index)| catalog.get(index))
                .cloned()
                .ok_or_else(|| {
                    AppError::NotFound(format!("no location choice with id '{choice_id}'"))
                })?;
            FormElement::Location(FieldContent::new(Some(location), placeholder))
        } else if let Some(group) = kind.attribute_group() {
            let attribute = self
                .attributes
                .as_ref()
                .and_then(|catalog| catalog.find(group, choice_id))
                .cloned()
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "no {} choice with id '{choice_id}'",
                        group.as_str()
                    ))
                })?;
            FormElement::attribute(group, FieldContent::new(Some(attribute), placeholder))
        } else {
            return Err(AppError::Validation(format!(
                "field '{}' does not offer choices",
                kind.as_str()
            )));
        };

        self.dismiss_picker();
        self.upsert_and_render(element);
        Ok(())
    }

    /// Applies a date picker selection.
    pub fn select_date(&mut self, kind: FieldKind, date: DateTime<Utc>) -> AppResult<()> {
        self.ensure_ready()?;
        if kind != FieldKind::BirthDay {
            return Err(AppError::Validation(format!(
                "field '{}' does not accept dates",
                kind.as_str()
            )));
        }

        let element = FormElement::BirthDay(FieldContent::new(Some(date), self.placeholder(kind)));
        self.dismiss_picker();
        self.upsert_and_render(element);
        Ok(())
    }

    /// Closes the form without persisting anything.
    pub fn dismiss(&mut self) {
        if self.phase == FormPhase::Closed {
            return;
        }

        info!(session_id = %self.session_id, "profile form dismissed");
        self.phase = FormPhase::Closed;
        self.active_picker = None;
        self.view.close();
    }

    fn edit_text(&mut self, kind: FieldKind, raw_text: Option<String>) {
        let is_enabled = match self.state.get(kind) {
            Some(FormElement::Height { is_enabled, .. }) => *is_enabled,
            _ => true,
        };
        let content = FieldContent::new(raw_text, self.placeholder(kind));

        let element = match FormElement::text(kind, content) {
            Some(FormElement::Height { content, .. }) => FormElement::Height {
                content,
                is_enabled,
            },
            Some(element) => element,
            None => return,
        };
        self.state.upsert(element);
    }

    fn query_locations(&mut self, query: &str) {
        let placeholder = self.placeholder(FieldKind::Location);
        self.state
            .upsert(FormElement::Location(FieldContent::empty(placeholder)));

        let choices: Vec<PickerChoice> = self
            .locations
            .as_ref()
            .map(|catalog| {
                catalog
                    .filter_by_prefix(query)
                    .into_iter()
                    .map(|(index, location)| PickerChoice::for_location(index, location))
                    .collect()
            })
            .unwrap_or_default();

        if choices.is_empty() {
            self.dismiss_picker();
        } else {
            self.open_picker(ActivePicker::Choice(FieldKind::Location), &choices);
        }
    }

    fn show_attribute_picker(&mut self, kind: FieldKind) {
        let choices: Vec<PickerChoice> = match (kind.attribute_group(), self.attributes.as_ref()) {
            (Some(group), Some(catalog)) => catalog
                .choices(group)
                .iter()
                .map(PickerChoice::from)
                .collect(),
            _ => Vec::new(),
        };

        self.open_picker(ActivePicker::Choice(kind), &choices);
    }

    async fn pick_image(&mut self, kind: FieldKind) {
        let Some(picture) = self.image_picker.pick_image().await else {
            debug!(session_id = %self.session_id, field = kind.as_str(), "no image chosen");
            return;
        };

        let element = if kind == FieldKind::SecondaryImage {
            FormElement::SecondaryImage(Some(picture))
        } else {
            FormElement::ProfileImage(Some(picture))
        };
        self.upsert_and_render(element);
    }

    fn toggle_image_roles(&mut self) {
        let swapped = matches!(
            self.state.get(FieldKind::ImageRoleSwitch),
            Some(FormElement::ImageRoleSwitch(true))
        );
        self.upsert_and_render(FormElement::ImageRoleSwitch(!swapped));
    }

    async fn submit(&mut self) -> AppResult<()> {
        let profile = match create_profile(&self.state, Utc::now()) {
            Ok(profile) => profile,
            Err(error) => {
                info!(
                    session_id = %self.session_id,
                    invalid_count = error.field_errors().len(),
                    "profile form rejected"
                );
                for field_error in error.field_errors() {
                    self.view
                        .show_field_error(field_error.kind, field_error.message.as_str());
                }
                return Ok(());
            }
        };

        if let Err(error) = self.profile_store.save_profile(Some(profile)).await {
            warn!(
                session_id = %self.session_id,
                error = %error,
                "failed to persist profile"
            );
            self.view.show_general_error("Could not save profile");
            return Ok(());
        }

        info!(session_id = %self.session_id, "profile saved");
        self.phase = FormPhase::Closed;
        self.active_picker = None;
        self.view.close();
        Ok(())
    }
}
