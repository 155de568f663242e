use std::collections::HashMap;

use crate::form::{FieldContent, FieldKind, FormElement};
use crate::profile::UserProfile;

/// Unordered collection of form elements keyed by field kind.
///
/// Performs no validation; upserting an element replaces any element of the
/// same kind regardless of content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    elements: HashMap<FieldKind, FormElement>,
}

impl FormState {
    /// Creates a form state without any elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form state holding the empty element of every kind.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut state = Self::new();
        for kind in FieldKind::all() {
            state.upsert(FormElement::empty(*kind));
        }
        state
    }

    /// Creates a form state seeded from a persisted profile.
    ///
    /// Kinds the profile does not carry keep their empty element.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        let mut state = Self::with_defaults();
        let text = |kind: FieldKind, value: Option<String>| {
            FieldContent::new(value, kind.default_placeholder())
        };

        state.upsert(FormElement::ProfileImage(Some(profile.picture.clone())));
        state.upsert(FormElement::SecondaryImage(
            profile.secondary_picture.clone(),
        ));
        state.upsert(FormElement::DisplayName(text(
            FieldKind::DisplayName,
            Some(profile.display_name.clone()),
        )));
        state.upsert(FormElement::RealName(text(
            FieldKind::RealName,
            Some(profile.real_name.clone()),
        )));
        state.upsert(FormElement::Location(FieldContent::new(
            Some(profile.location.clone()),
            FieldKind::Location.default_placeholder(),
        )));
        state.upsert(FormElement::BirthDay(FieldContent::new(
            Some(profile.birthday),
            FieldKind::BirthDay.default_placeholder(),
        )));

        let attributes = [
            (FieldKind::Gender, Some(&profile.gender)),
            (FieldKind::Ethnicity, profile.ethnicity.as_ref()),
            (FieldKind::Religion, profile.religion.as_ref()),
            (FieldKind::Figure, profile.figure.as_ref()),
            (FieldKind::MaritalStatus, Some(&profile.marital_status)),
        ];
        for (kind, attribute) in attributes {
            if let Some(group) = kind.attribute_group() {
                state.upsert(FormElement::attribute(
                    group,
                    FieldContent::new(attribute.cloned(), kind.default_placeholder()),
                ));
            }
        }

        state.upsert(FormElement::Height {
            content: text(
                FieldKind::Height,
                profile.height.map(|height| height.to_string()),
            ),
            is_enabled: true,
        });
        state.upsert(FormElement::Occupation(text(
            FieldKind::Occupation,
            profile.occupation.clone(),
        )));
        state.upsert(FormElement::AboutMe(text(
            FieldKind::AboutMe,
            profile.about_me.clone(),
        )));

        state
    }

    /// Inserts an element, replacing and returning any element of the same kind.
    pub fn upsert(&mut self, element: FormElement) -> Option<FormElement> {
        self.elements.insert(element.kind(), element)
    }

    /// Returns the current element for a kind.
    #[must_use]
    pub fn get(&self, kind: FieldKind) -> Option<&FormElement> {
        self.elements.get(&kind)
    }

    /// Removes and returns the element for a kind.
    pub fn remove(&mut self, kind: FieldKind) -> Option<FormElement> {
        self.elements.remove(&kind)
    }

    /// Returns `true` when an element of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FieldKind) -> bool {
        self.elements.contains_key(&kind)
    }

    /// Returns every element, ordered by kind for stable rendering.
    #[must_use]
    pub fn all(&self) -> Vec<FormElement> {
        let mut elements: Vec<FormElement> = self.elements.values().cloned().collect();
        elements.sort_by_key(FormElement::kind);
        elements
    }

    /// Iterates over the stored elements in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &FormElement> {
        self.elements.values()
    }

    /// Returns the number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when no element is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
