use editable_profile_core::{AppError, AppResult};
use editable_profile_domain::{
    Attribute, AttributeCatalog, AttributeGroup, Location, LocationCatalog,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct LocationsResponse {
    cities: Vec<CityResponse>,
}

#[derive(Debug, Deserialize)]
struct CityResponse {
    lat: String,
    lon: String,
    city: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AttributesResponse {
    gender: Vec<AttributeResponse>,
    ethnicity: Vec<AttributeResponse>,
    religion: Vec<AttributeResponse>,
    figure: Vec<AttributeResponse>,
    marital_status: Vec<AttributeResponse>,
}

#[derive(Debug, Deserialize)]
struct AttributeResponse {
    id: String,
    name: String,
}

/// Decodes a city list body.
///
/// An undecodable body or an empty city list is reported as unavailable.
pub fn parse_locations(body: &str) -> AppResult<LocationCatalog> {
    let response = serde_json::from_str::<LocationsResponse>(body).map_err(|error| {
        AppError::Unavailable(format!("city list could not be decoded: {error}"))
    })?;
    locations_from_response(response)
}

/// Decodes an attribute list body.
///
/// The catalog is unavailable when the body is undecodable or any group is empty.
pub fn parse_attributes(body: &str) -> AppResult<AttributeCatalog> {
    let response = serde_json::from_str::<AttributesResponse>(body).map_err(|error| {
        AppError::Unavailable(format!("attribute lists could not be decoded: {error}"))
    })?;
    attributes_from_response(response)
}

pub(super) fn locations_from_response(response: LocationsResponse) -> AppResult<LocationCatalog> {
    if response.cities.is_empty() {
        return Err(AppError::Unavailable("city list is empty".to_owned()));
    }

    Ok(LocationCatalog::new(
        response
            .cities
            .into_iter()
            .map(|city| Location::new(city.lat, city.lon, city.city))
            .collect(),
    ))
}

pub(super) fn attributes_from_response(
    response: AttributesResponse,
) -> AppResult<AttributeCatalog> {
    let into_attributes = |values: Vec<AttributeResponse>| -> Vec<Attribute> {
        values
            .into_iter()
            .map(|value| Attribute::new(value.id, value.name))
            .collect()
    };

    let catalog = AttributeCatalog::new(
        into_attributes(response.gender),
        into_attributes(response.ethnicity),
        into_attributes(response.religion),
        into_attributes(response.figure),
        into_attributes(response.marital_status),
    );

    match catalog.first_empty_group() {
        Some(group) => Err(empty_group_error(group)),
        None => Ok(catalog),
    }
}

fn empty_group_error(group: AttributeGroup) -> AppError {
    AppError::Unavailable(format!("attribute list '{}' is empty", group.as_str()))
}
