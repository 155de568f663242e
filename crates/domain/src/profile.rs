use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Attribute, Location};
use crate::picture::Picture;

/// Completed profile as persisted by the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Primary picture.
    pub picture: Picture,
    /// Optional second picture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_picture: Option<Picture>,
    /// Public display name.
    pub display_name: String,
    /// Real name.
    pub real_name: String,
    /// City picked from the location catalog.
    pub location: Location,
    /// Birthday.
    pub birthday: DateTime<Utc>,
    /// Gender attribute.
    pub gender: Attribute,
    /// Ethnicity attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<Attribute>,
    /// Religion attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<Attribute>,
    /// Figure attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure: Option<Attribute>,
    /// Marital status attribute.
    pub marital_status: Attribute,
    /// Height in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    /// Occupation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
}
