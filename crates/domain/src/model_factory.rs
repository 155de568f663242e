//! Builds a [`UserProfile`] from a validated form state.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::Attribute;
use crate::form::{FieldContent, FieldKind, FormElement};
use crate::form_state::FormState;
use crate::profile::UserProfile;
use crate::validation::{FieldError, MANDATORY_KINDS, parse_height, validate_element};

/// Reason a form state could not be turned into a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    /// Mandatory kinds are absent from the form state.
    #[error("missing mandatory fields: {}", join_kinds(.0))]
    MissingMandatoryFields(Vec<FieldError>),

    /// Present elements failed validation.
    #[error("invalid fields: {}", join_kinds(.0))]
    InvalidFields(Vec<FieldError>),
}

impl ProfileValidationError {
    /// Returns one error per offending field.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::MissingMandatoryFields(errors) | Self::InvalidFields(errors) => errors,
        }
    }
}

fn join_kinds(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates every element and projects the form state into a profile.
///
/// All invalid fields are reported at once. `now` bounds the birthday.
pub fn create_profile(
    state: &FormState,
    now: DateTime<Utc>,
) -> Result<UserProfile, ProfileValidationError> {
    let missing: Vec<FieldError> = MANDATORY_KINDS
        .iter()
        .filter(|kind| !state.contains(**kind))
        .map(|kind| FieldError::for_kind(*kind))
        .collect();
    if !missing.is_empty() {
        return Err(ProfileValidationError::MissingMandatoryFields(missing));
    }

    let mut invalid: Vec<FieldError> = state
        .elements()
        .filter_map(|element| validate_element(element, now).err())
        .collect();
    if !invalid.is_empty() {
        invalid.sort_by_key(|error| error.kind);
        return Err(ProfileValidationError::InvalidFields(invalid));
    }

    project(state)
}

fn project(state: &FormState) -> Result<UserProfile, ProfileValidationError> {
    let primary = match state.get(FieldKind::ProfileImage) {
        Some(FormElement::ProfileImage(picture)) => picture.clone(),
        _ => None,
    };
    let secondary = match state.get(FieldKind::SecondaryImage) {
        Some(FormElement::SecondaryImage(picture)) => picture.clone(),
        _ => None,
    };
    let swap_roles = matches!(
        state.get(FieldKind::ImageRoleSwitch),
        Some(FormElement::ImageRoleSwitch(true))
    );

    let (picture, secondary_picture) = match (swap_roles, primary, secondary) {
        (true, Some(primary), Some(secondary)) => (Some(secondary), Some(primary)),
        (_, primary, secondary) => (primary, secondary),
    };

    let location = match state.get(FieldKind::Location) {
        Some(FormElement::Location(content)) => content.value().cloned(),
        _ => None,
    };
    let birthday = match state.get(FieldKind::BirthDay) {
        Some(FormElement::BirthDay(content)) => content.value().copied(),
        _ => None,
    };

    Ok(UserProfile {
        picture: required(FieldKind::ProfileImage, picture)?,
        secondary_picture,
        display_name: required(FieldKind::DisplayName, text(state, FieldKind::DisplayName))?,
        real_name: required(FieldKind::RealName, text(state, FieldKind::RealName))?,
        location: required(FieldKind::Location, location)?,
        birthday: required(FieldKind::BirthDay, birthday)?,
        gender: required(FieldKind::Gender, attribute(state, FieldKind::Gender))?,
        ethnicity: attribute(state, FieldKind::Ethnicity),
        religion: attribute(state, FieldKind::Religion),
        figure: attribute(state, FieldKind::Figure),
        marital_status: required(
            FieldKind::MaritalStatus,
            attribute(state, FieldKind::MaritalStatus),
        )?,
        height: text(state, FieldKind::Height).and_then(|height| parse_height(height.as_str())),
        occupation: text(state, FieldKind::Occupation),
        about_me: text(state, FieldKind::AboutMe),
    })
}

fn required<T>(kind: FieldKind, value: Option<T>) -> Result<T, ProfileValidationError> {
    value.ok_or_else(|| {
        ProfileValidationError::MissingMandatoryFields(vec![FieldError::for_kind(kind)])
    })
}

fn text(state: &FormState, kind: FieldKind) -> Option<String> {
    state
        .get(kind)
        .and_then(FormElement::text_content)
        .and_then(FieldContent::value)
        .filter(|text| !text.is_empty())
        .cloned()
}

fn attribute(state: &FormState, kind: FieldKind) -> Option<Attribute> {
    state
        .get(kind)
        .and_then(FormElement::attribute_content)
        .and_then(FieldContent::value)
        .cloned()
}
