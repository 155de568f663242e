use std::str::FromStr;

use editable_profile_core::AppError;
use serde::{Deserialize, Serialize};

/// Single-choice attribute option such as one gender or religion entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    id: String,
    name: String,
}

impl Attribute {
    /// Creates an attribute option.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns the stable attribute identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the user-facing attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// City entry from the location catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    lat: String,
    lon: String,
    city: String,
}

impl Location {
    /// Creates a location entry.
    #[must_use]
    pub fn new(lat: impl Into<String>, lon: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
            city: city.into(),
        }
    }

    /// Returns the latitude as published by the catalog.
    #[must_use]
    pub fn lat(&self) -> &str {
        self.lat.as_str()
    }

    /// Returns the longitude as published by the catalog.
    #[must_use]
    pub fn lon(&self) -> &str {
        self.lon.as_str()
    }

    /// Returns the city name.
    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_str()
    }
}

/// Attribute lists available in the attribute catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeGroup {
    /// Gender options.
    Gender,
    /// Ethnicity options.
    Ethnicity,
    /// Religion options.
    Religion,
    /// Figure options.
    Figure,
    /// Marital status options.
    MaritalStatus,
}

impl AttributeGroup {
    /// Returns a stable transport value for this group.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Ethnicity => "ethnicity",
            Self::Religion => "religion",
            Self::Figure => "figure",
            Self::MaritalStatus => "marital_status",
        }
    }

    /// Returns all attribute groups.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AttributeGroup] = &[
            AttributeGroup::Gender,
            AttributeGroup::Ethnicity,
            AttributeGroup::Religion,
            AttributeGroup::Figure,
            AttributeGroup::MaritalStatus,
        ];

        ALL
    }
}

impl FromStr for AttributeGroup {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "gender" => Ok(Self::Gender),
            "ethnicity" => Ok(Self::Ethnicity),
            "religion" => Ok(Self::Religion),
            "figure" => Ok(Self::Figure),
            "marital_status" => Ok(Self::MaritalStatus),
            _ => Err(AppError::Validation(format!(
                "unknown attribute group '{value}'"
            ))),
        }
    }
}

/// Read-only snapshot of every single-choice attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCatalog {
    gender: Vec<Attribute>,
    ethnicity: Vec<Attribute>,
    religion: Vec<Attribute>,
    figure: Vec<Attribute>,
    marital_status: Vec<Attribute>,
}

impl AttributeCatalog {
    /// Creates an attribute catalog from its five lists.
    #[must_use]
    pub fn new(
        gender: Vec<Attribute>,
        ethnicity: Vec<Attribute>,
        religion: Vec<Attribute>,
        figure: Vec<Attribute>,
        marital_status: Vec<Attribute>,
    ) -> Self {
        Self {
            gender,
            ethnicity,
            religion,
            figure,
            marital_status,
        }
    }

    /// Returns the options of one attribute group.
    #[must_use]
    pub fn choices(&self, group: AttributeGroup) -> &[Attribute] {
        match group {
            AttributeGroup::Gender => &self.gender,
            AttributeGroup::Ethnicity => &self.ethnicity,
            AttributeGroup::Religion => &self.religion,
            AttributeGroup::Figure => &self.figure,
            AttributeGroup::MaritalStatus => &self.marital_status,
        }
    }

    /// Resolves an attribute by identifier inside one group.
    #[must_use]
    pub fn find(&self, group: AttributeGroup, id: &str) -> Option<&Attribute> {
        self.choices(group)
            .iter()
            .find(|attribute| attribute.id() == id)
    }

    /// Returns the first group that has no options, if any.
    #[must_use]
    pub fn first_empty_group(&self) -> Option<AttributeGroup> {
        AttributeGroup::all()
            .iter()
            .copied()
            .find(|group| self.choices(*group).is_empty())
    }
}

/// Read-only snapshot of the city list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCatalog {
    cities: Vec<Location>,
}

impl LocationCatalog {
    /// Creates a location catalog.
    #[must_use]
    pub fn new(cities: Vec<Location>) -> Self {
        Self { cities }
    }

    /// Returns every city in catalog order.
    #[must_use]
    pub fn cities(&self) -> &[Location] {
        &self.cities
    }

    /// Returns cities whose name starts with `query`, ignoring case, paired
    /// with their catalog index.
    ///
    /// An empty query matches every city. City names are not unique, so the
    /// index is what identifies an entry.
    #[must_use]
    pub fn filter_by_prefix(&self, query: &str) -> Vec<(usize, &Location)> {
        let query = query.to_lowercase();
        self.cities
            .iter()
            .enumerate()
            .filter(|(_, location)| location.city().to_lowercase().starts_with(query.as_str()))
            .collect()
    }

    /// Returns the city at a catalog index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Location> {
        self.cities.get(index)
    }
}
