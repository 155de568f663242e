use async_trait::async_trait;
use editable_profile_core::AppResult;
use editable_profile_domain::UserProfile;

/// Repository port for the locally persisted profile.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the persisted profile, if any.
    ///
    /// A stored profile that cannot be decoded is reported as absent.
    async fn load_profile(&self) -> AppResult<Option<UserProfile>>;

    /// Persists a profile, or clears the stored one when `profile` is `None`.
    async fn save_profile(&self, profile: Option<UserProfile>) -> AppResult<()>;

    /// Returns whether a profile is currently stored.
    async fn is_registered(&self) -> AppResult<bool> {
        Ok(self.load_profile().await?.is_some())
    }
}
