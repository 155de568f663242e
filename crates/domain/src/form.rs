use std::str::FromStr;

use chrono::{DateTime, Utc};
use editable_profile_core::AppError;
use serde::{Deserialize, Serialize};

use crate::catalog::{Attribute, AttributeGroup, Location};
use crate::picture::Picture;

/// Identity of one profile form field.
///
/// A form state holds at most one element per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Primary profile picture.
    ProfileImage,
    /// Optional second picture.
    SecondaryImage,
    /// Swaps primary and secondary pictures when the profile is built.
    ImageRoleSwitch,
    /// Public display name.
    DisplayName,
    /// Real name.
    RealName,
    /// City picked from the location catalog.
    Location,
    /// Birthday date.
    BirthDay,
    /// Gender attribute.
    Gender,
    /// Ethnicity attribute.
    Ethnicity,
    /// Religion attribute.
    Religion,
    /// Figure attribute.
    Figure,
    /// Marital status attribute.
    MaritalStatus,
    /// Height in centimeters, entered as text.
    Height,
    /// Occupation.
    Occupation,
    /// Free-form description.
    AboutMe,
    /// Submit button.
    DoneButton,
}

impl FieldKind {
    /// Returns a stable transport value for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileImage => "profile_image",
            Self::SecondaryImage => "secondary_image",
            Self::ImageRoleSwitch => "image_role_switch",
            Self::DisplayName => "display_name",
            Self::RealName => "real_name",
            Self::Location => "location",
            Self::BirthDay => "birth_day",
            Self::Gender => "gender",
            Self::Ethnicity => "ethnicity",
            Self::Religion => "religion",
            Self::Figure => "figure",
            Self::MaritalStatus => "marital_status",
            Self::Height => "height",
            Self::Occupation => "occupation",
            Self::AboutMe => "about_me",
            Self::DoneButton => "done_button",
        }
    }

    /// Returns all field kinds in screen order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[FieldKind] = &[
            FieldKind::ProfileImage,
            FieldKind::SecondaryImage,
            FieldKind::ImageRoleSwitch,
            FieldKind::DisplayName,
            FieldKind::RealName,
            FieldKind::Location,
            FieldKind::BirthDay,
            FieldKind::Gender,
            FieldKind::Ethnicity,
            FieldKind::Religion,
            FieldKind::Figure,
            FieldKind::MaritalStatus,
            FieldKind::Height,
            FieldKind::Occupation,
            FieldKind::AboutMe,
            FieldKind::DoneButton,
        ];

        ALL
    }

    /// Returns the attribute group backing this kind, if it is an attribute field.
    #[must_use]
    pub fn attribute_group(&self) -> Option<AttributeGroup> {
        match self {
            Self::Gender => Some(AttributeGroup::Gender),
            Self::Ethnicity => Some(AttributeGroup::Ethnicity),
            Self::Religion => Some(AttributeGroup::Religion),
            Self::Figure => Some(AttributeGroup::Figure),
            Self::MaritalStatus => Some(AttributeGroup::MaritalStatus),
            _ => None,
        }
    }

    /// Returns the placeholder shown while the field has no content.
    #[must_use]
    pub fn default_placeholder(&self) -> &'static str {
        match self {
            Self::ProfileImage => "Profile picture",
            Self::SecondaryImage => "Second picture",
            Self::ImageRoleSwitch => "Use second picture as main",
            Self::DisplayName => "Display name",
            Self::RealName => "Real name",
            Self::Location => "Your location",
            Self::BirthDay => "Birthday date",
            Self::Gender => "Your gender",
            Self::Ethnicity => "Ethnicity",
            Self::Religion => "Religion",
            Self::Figure => "Figure",
            Self::MaritalStatus => "Marital status",
            Self::Height => "Height",
            Self::Occupation => "Occupation",
            Self::AboutMe => "About me",
            Self::DoneButton => "Save/register",
        }
    }
}

impl FromStr for FieldKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown field kind '{value}'")))
    }
}

/// Optional field value together with its placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldContent<T> {
    value: Option<T>,
    placeholder: String,
}

impl<T> FieldContent<T> {
    /// Creates field content.
    #[must_use]
    pub fn new(value: Option<T>, placeholder: impl Into<String>) -> Self {
        Self {
            value,
            placeholder: placeholder.into(),
        }
    }

    /// Creates content without a value.
    #[must_use]
    pub fn empty(placeholder: impl Into<String>) -> Self {
        Self::new(None, placeholder)
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns the placeholder.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_str()
    }
}

/// One profile form field and its typed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormElement {
    /// Primary profile picture.
    ProfileImage(Option<Picture>),
    /// Optional second picture.
    SecondaryImage(Option<Picture>),
    /// Picture role swap toggle, never persisted.
    ImageRoleSwitch(bool),
    /// Public display name.
    DisplayName(FieldContent<String>),
    /// Real name.
    RealName(FieldContent<String>),
    /// City resolved from the location catalog.
    Location(FieldContent<Location>),
    /// Birthday.
    BirthDay(FieldContent<DateTime<Utc>>),
    /// Gender attribute.
    Gender(FieldContent<Attribute>),
    /// Ethnicity attribute.
    Ethnicity(FieldContent<Attribute>),
    /// Religion attribute.
    Religion(FieldContent<Attribute>),
    /// Figure attribute.
    Figure(FieldContent<Attribute>),
    /// Marital status attribute.
    MaritalStatus(FieldContent<Attribute>),
    /// Height text plus whether the control accepts input.
    Height {
        /// Entered text.
        content: FieldContent<String>,
        /// Whether the control accepts input.
        is_enabled: bool,
    },
    /// Occupation.
    Occupation(FieldContent<String>),
    /// Free-form description.
    AboutMe(FieldContent<String>),
    /// Submit button.
    DoneButton {
        /// Button label.
        label: String,
    },
}

impl FormElement {
    /// Returns the field kind of this element.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::ProfileImage(_) => FieldKind::ProfileImage,
            Self::SecondaryImage(_) => FieldKind::SecondaryImage,
            Self::ImageRoleSwitch(_) => FieldKind::ImageRoleSwitch,
            Self::DisplayName(_) => FieldKind::DisplayName,
            Self::RealName(_) => FieldKind::RealName,
            Self::Location(_) => FieldKind::Location,
            Self::BirthDay(_) => FieldKind::BirthDay,
            Self::Gender(_) => FieldKind::Gender,
            Self::Ethnicity(_) => FieldKind::Ethnicity,
            Self::Religion(_) => FieldKind::Religion,
            Self::Figure(_) => FieldKind::Figure,
            Self::MaritalStatus(_) => FieldKind::MaritalStatus,
            Self::Height { .. } => FieldKind::Height,
            Self::Occupation(_) => FieldKind::Occupation,
            Self::AboutMe(_) => FieldKind::AboutMe,
            Self::DoneButton { .. } => FieldKind::DoneButton,
        }
    }

    /// Returns the element a freshly opened form shows for `kind`.
    #[must_use]
    pub fn empty(kind: FieldKind) -> Self {
        let placeholder = kind.default_placeholder();
        match kind {
            FieldKind::ProfileImage => Self::ProfileImage(None),
            FieldKind::SecondaryImage => Self::SecondaryImage(None),
            FieldKind::ImageRoleSwitch => Self::ImageRoleSwitch(false),
            FieldKind::DisplayName => Self::DisplayName(FieldContent::empty(placeholder)),
            FieldKind::RealName => Self::RealName(FieldContent::empty(placeholder)),
            FieldKind::Location => Self::Location(FieldContent::empty(placeholder)),
            FieldKind::BirthDay => Self::BirthDay(FieldContent::empty(placeholder)),
            FieldKind::Gender => Self::Gender(FieldContent::empty(placeholder)),
            FieldKind::Ethnicity => Self::Ethnicity(FieldContent::empty(placeholder)),
            FieldKind::Religion => Self::Religion(FieldContent::empty(placeholder)),
            FieldKind::Figure => Self::Figure(FieldContent::empty(placeholder)),
            FieldKind::MaritalStatus => Self::MaritalStatus(FieldContent::empty(placeholder)),
            FieldKind::Height => Self::Height {
                content: FieldContent::empty(placeholder),
                is_enabled: true,
            },
            FieldKind::Occupation => Self::Occupation(FieldContent::empty(placeholder)),
            FieldKind::AboutMe => Self::AboutMe(FieldContent::empty(placeholder)),
            FieldKind::DoneButton => Self::DoneButton {
                label: placeholder.to_owned(),
            },
        }
    }

    /// Builds a free-text element, or `None` when `kind` is not a free-text kind.
    ///
    /// Height elements are created enabled.
    #[must_use]
    pub fn text(kind: FieldKind, content: FieldContent<String>) -> Option<Self> {
        match kind {
            FieldKind::DisplayName => Some(Self::DisplayName(content)),
            FieldKind::RealName => Some(Self::RealName(content)),
            FieldKind::Height => Some(Self::Height {
                content,
                is_enabled: true,
            }),
            FieldKind::Occupation => Some(Self::Occupation(content)),
            FieldKind::AboutMe => Some(Self::AboutMe(content)),
            _ => None,
        }
    }

    /// Builds the attribute element for one attribute group.
    #[must_use]
    pub fn attribute(group: AttributeGroup, content: FieldContent<Attribute>) -> Self {
        match group {
            AttributeGroup::Gender => Self::Gender(content),
            AttributeGroup::Ethnicity => Self::Ethnicity(content),
            AttributeGroup::Religion => Self::Religion(content),
            AttributeGroup::Figure => Self::Figure(content),
            AttributeGroup::MaritalStatus => Self::MaritalStatus(content),
        }
    }

    /// Returns the text content of a free-text element.
    #[must_use]
    pub fn text_content(&self) -> Option<&FieldContent<String>> {
        match self {
            Self::DisplayName(content)
            | Self::RealName(content)
            | Self::Occupation(content)
            | Self::AboutMe(content)
            | Self::Height { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Returns the attribute content of an attribute element.
    #[must_use]
    pub fn attribute_content(&self) -> Option<&FieldContent<Attribute>> {
        match self {
            Self::Gender(content)
            | Self::Ethnicity(content)
            | Self::Religion(content)
            | Self::Figure(content)
            | Self::MaritalStatus(content) => Some(content),
            _ => None,
        }
    }

    /// Returns the placeholder or label of this element.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        match self {
            Self::ProfileImage(_) | Self::SecondaryImage(_) | Self::ImageRoleSwitch(_) => {
                self.kind().default_placeholder()
            }
            Self::Location(content) => content.placeholder(),
            Self::BirthDay(content) => content.placeholder(),
            Self::DoneButton { label } => label.as_str(),
            other => other
                .text_content()
                .map(FieldContent::placeholder)
                .or_else(|| other.attribute_content().map(FieldContent::placeholder))
                .unwrap_or_default(),
        }
    }
}
