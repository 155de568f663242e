//! Per-field validation rules for the profile form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::{FieldContent, FieldKind, FormElement};

/// Maximum character count for short free-text fields.
pub const SHORT_TEXT_MAX_LENGTH: usize = 256;

/// Maximum character count for the about-me field.
pub const ABOUT_ME_MAX_LENGTH: usize = 5000;

/// Smallest accepted height.
pub const HEIGHT_MIN: i64 = 50;

/// First height value that is no longer accepted.
pub const HEIGHT_MAX_EXCLUSIVE: i64 = 250;

/// Kinds that must be present with valid content before a profile is built.
pub const MANDATORY_KINDS: &[FieldKind] = &[
    FieldKind::ProfileImage,
    FieldKind::DisplayName,
    FieldKind::RealName,
    FieldKind::Location,
    FieldKind::BirthDay,
    FieldKind::Gender,
    FieldKind::MaritalStatus,
];

/// Validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending field.
    pub kind: FieldKind,
    /// User-facing message.
    pub message: String,
}

impl FieldError {
    /// Creates the standard error for a kind.
    #[must_use]
    pub fn for_kind(kind: FieldKind) -> Self {
        Self {
            kind,
            message: error_message(kind).to_owned(),
        }
    }
}

/// Returns `true` when `kind` belongs to the mandatory set.
#[must_use]
pub fn is_mandatory(kind: FieldKind) -> bool {
    MANDATORY_KINDS.contains(&kind)
}

/// Returns the fixed user-facing message for an invalid field of `kind`.
#[must_use]
pub fn error_message(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::ProfileImage => "You should choose an image",
        FieldKind::DisplayName | FieldKind::RealName | FieldKind::Occupation => {
            "Text should be in range 1...256"
        }
        FieldKind::AboutMe => "Text should be in range 1...5000",
        FieldKind::BirthDay => "bDay should be between 1970 and nowday",
        FieldKind::Location => "You should choos form list",
        FieldKind::Gender
        | FieldKind::Ethnicity
        | FieldKind::Religion
        | FieldKind::Figure
        | FieldKind::MaritalStatus => "Choose one of the options",
        FieldKind::Height => "Enter correct Int value (50-250)",
        FieldKind::SecondaryImage | FieldKind::ImageRoleSwitch | FieldKind::DoneButton => "",
    }
}

/// Returns `true` when the element's content satisfies its kind's rules.
///
/// `now` is the upper bound for birthdays.
#[must_use]
pub fn is_element_valid(element: &FormElement, now: DateTime<Utc>) -> bool {
    let mandatory = is_mandatory(element.kind());
    match element {
        FormElement::ProfileImage(picture) => picture.is_some() || !mandatory,
        FormElement::DisplayName(content)
        | FormElement::RealName(content)
        | FormElement::Occupation(content) => {
            is_text_valid(content, SHORT_TEXT_MAX_LENGTH, mandatory)
        }
        FormElement::AboutMe(content) => is_text_valid(content, ABOUT_ME_MAX_LENGTH, mandatory),
        FormElement::Height { content, .. } => is_height_valid(content, mandatory),
        FormElement::BirthDay(content) => match content.value() {
            Some(date) => *date > DateTime::<Utc>::UNIX_EPOCH && *date < now,
            None => !mandatory,
        },
        FormElement::Location(content) => content.value().is_some() || !mandatory,
        FormElement::Gender(content)
        | FormElement::Ethnicity(content)
        | FormElement::Religion(content)
        | FormElement::Figure(content)
        | FormElement::MaritalStatus(content) => content.value().is_some() || !mandatory,
        FormElement::SecondaryImage(_)
        | FormElement::ImageRoleSwitch(_)
        | FormElement::DoneButton { .. } => true,
    }
}

/// Validates one element, returning its standard error on failure.
pub fn validate_element(element: &FormElement, now: DateTime<Utc>) -> Result<(), FieldError> {
    if is_element_valid(element, now) {
        Ok(())
    } else {
        Err(FieldError::for_kind(element.kind()))
    }
}

/// Parses height text, returning `None` for empty text.
///
/// Callers are expected to validate first; out-of-range values are rejected here too.
#[must_use]
pub fn parse_height(text: &str) -> Option<u16> {
    let value = text.parse::<i64>().ok()?;
    if !(HEIGHT_MIN..HEIGHT_MAX_EXCLUSIVE).contains(&value) {
        return None;
    }
    u16::try_from(value).ok()
}

fn is_text_valid(content: &FieldContent<String>, max_length: usize, mandatory: bool) -> bool {
    match content.value().filter(|text| !text.is_empty()) {
        Some(text) => text.chars().count() <= max_length,
        None => !mandatory,
    }
}

fn is_height_valid(content: &FieldContent<String>, mandatory: bool) -> bool {
    match content.value().filter(|text| !text.is_empty()) {
        Some(text) => parse_height(text).is_some(),
        None => !mandatory,
    }
}
