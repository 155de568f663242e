use async_trait::async_trait;
use editable_profile_core::AppResult;
use editable_profile_domain::{AttributeCatalog, LocationCatalog};

/// Port for fetching the reference lists that drive the pickers.
///
/// Implementations report an empty list as `AppError::Unavailable`, never as
/// an empty success.
#[async_trait]
pub trait ReferenceFetcher: Send + Sync {
    /// Fetches the single-choice attribute lists.
    async fn fetch_attributes(&self) -> AppResult<AttributeCatalog>;

    /// Fetches the city list.
    async fn fetch_locations(&self) -> AppResult<LocationCatalog>;
}
