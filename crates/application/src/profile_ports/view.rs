use async_trait::async_trait;
use editable_profile_domain::{Attribute, FieldKind, FormElement, Location, Picture};

/// Option offered by a single-choice picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerChoice {
    /// Identifier resolved against the catalog on selection.
    pub id: String,
    /// Text shown to the user.
    pub title: String,
}

impl From<&Attribute> for PickerChoice {
    fn from(attribute: &Attribute) -> Self {
        Self {
            id: attribute.id().to_owned(),
            title: attribute.name().to_owned(),
        }
    }
}

impl PickerChoice {
    /// Builds the choice for the city at `index` in the location catalog.
    ///
    /// The id is the catalog index since city names may repeat.
    #[must_use]
    pub fn for_location(index: usize, location: &Location) -> Self {
        Self {
            id: index.to_string(),
            title: format!("{} ({}, {})", location.city(), location.lat(), location.lon()),
        }
    }
}

/// Port for the modal image selection UI.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Lets the user pick an image; `None` when the user cancels.
    async fn pick_image(&self) -> Option<Picture>;
}

/// Sink for everything the profile form controller wants displayed.
pub trait ProfileFormView: Send + Sync {
    /// Redraws every element.
    fn render(&self, elements: &[FormElement]);

    /// Redraws one element.
    fn render_one(&self, element: &FormElement);

    /// Shows the single-choice picker for a field.
    fn show_picker(&self, kind: FieldKind, choices: &[PickerChoice]);

    /// Shows the date picker for a field.
    fn show_date_picker(&self, kind: FieldKind);

    /// Hides whichever picker is visible.
    fn dismiss_picker(&self);

    /// Shows a validation message next to a field.
    fn show_field_error(&self, kind: FieldKind, message: &str);

    /// Shows a message that is not tied to a field.
    fn show_general_error(&self, message: &str);

    /// Closes the form.
    fn close(&self);
}

/// Button shown on the root screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootButton {
    /// Button title.
    pub title: String,
    /// Whether the button is hidden.
    pub is_hidden: bool,
}

/// Sink for the root screen.
pub trait RootView: Send + Sync {
    /// Shows the register and change-profile buttons.
    fn show_buttons(&self, register: RootButton, change_profile: RootButton);
}
