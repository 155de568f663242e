use async_trait::async_trait;
use editable_profile_application::ProfileStore;
use editable_profile_core::AppResult;
use editable_profile_domain::UserProfile;
use tokio::sync::RwLock;

/// In-memory profile store adapter.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<Option<UserProfile>>,
}

impl InMemoryProfileStore {
    /// Creates an empty in-memory profile store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `profile`.
    #[must_use]
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_profile(&self) -> AppResult<Option<UserProfile>> {
        Ok(self.profile.read().await.clone())
    }

    async fn save_profile(&self, profile: Option<UserProfile>) -> AppResult<()> {
        *self.profile.write().await = profile;
        Ok(())
    }
}
