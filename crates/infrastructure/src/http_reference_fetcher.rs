use async_trait::async_trait;
use editable_profile_application::ReferenceFetcher;
use editable_profile_core::{AppError, AppResult};
use editable_profile_domain::{AttributeCatalog, LocationCatalog};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

mod responses;

#[cfg(test)]
mod tests;

pub use responses::{parse_attributes, parse_locations};

const LOCATIONS_PATH: &str = "locations/cities.json";
const ATTRIBUTES_PATH: &str = "single_choice_attributes.json";

/// HTTP implementation of the reference data fetcher.
///
/// Both catalogs are read with plain `GET` requests relative to one base URL.
pub struct HttpReferenceFetcher {
    http_client: reqwest::Client,
    locations_url: Url,
    attributes_url: Url,
}

impl HttpReferenceFetcher {
    /// Creates a fetcher rooted at `base_url`.
    ///
    /// The base URL should end with `/` so that endpoint paths are appended to it.
    pub fn new(http_client: reqwest::Client, base_url: &Url) -> AppResult<Self> {
        let join = |path: &str| {
            base_url.join(path).map_err(|error| {
                AppError::Validation(format!(
                    "invalid reference endpoint '{path}' for base url '{base_url}': {error}"
                ))
            })
        };

        Ok(Self {
            http_client,
            locations_url: join(LOCATIONS_PATH)?,
            attributes_url: join(ATTRIBUTES_PATH)?,
        })
    }

    /// Returns the resolved city list endpoint.
    #[must_use]
    pub fn locations_url(&self) -> &Url {
        &self.locations_url
    }

    /// Returns the resolved attribute list endpoint.
    #[must_use]
    pub fn attributes_url(&self) -> &Url {
        &self.attributes_url
    }

    async fn get_json<T>(&self, url: &Url) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "requesting reference data");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| {
                AppError::Unavailable(format!("reference request to '{url}' failed: {error}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Unavailable(format!(
                "reference request to '{url}' returned status {status}"
            )));
        }

        let body = response.bytes().await.map_err(|error| {
            AppError::Unavailable(format!(
                "reference response from '{url}' could not be read: {error}"
            ))
        })?;

        serde_json::from_slice(&body).map_err(|error| {
            AppError::Unavailable(format!(
                "reference response from '{url}' could not be decoded: {error}"
            ))
        })
    }
}

#[async_trait]
impl ReferenceFetcher for HttpReferenceFetcher {
    async fn fetch_attributes(&self) -> AppResult<AttributeCatalog> {
        let response = self.get_json(&self.attributes_url).await?;
        responses::attributes_from_response(response)
    }

    async fn fetch_locations(&self) -> AppResult<LocationCatalog> {
        let response = self.get_json(&self.locations_url).await?;
        responses::locations_from_response(response)
    }
}
