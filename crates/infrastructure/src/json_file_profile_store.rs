use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use editable_profile_application::ProfileStore;
use editable_profile_core::{AppError, AppResult};
use editable_profile_domain::UserProfile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

const TEMP_SUFFIX: &str = "tmp";

/// Profile store persisting the single local profile as a JSON document.
///
/// A stored document that cannot be decoded is treated as no profile.
#[derive(Debug, Clone)]
pub struct JsonFileProfileStore {
    path: PathBuf,
}

impl JsonFileProfileStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn write_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let document = serde_json::to_vec_pretty(profile).map_err(|error| {
            AppError::Persistence(format!("failed to encode profile document: {error}"))
        })?;

        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| self.persistence_error("create directory for", &error))?;
        }

        // The previous document is only replaced by a completely written one.
        let staged_path = temp_path(&self.path);
        let written = match write_synced(&staged_path, &document).await {
            Ok(()) => tokio::fs::rename(&staged_path, &self.path)
                .await
                .map_err(|error| self.persistence_error("replace", &error)),
            Err(error) => Err(self.persistence_error("write", &error)),
        };

        if written.is_err() {
            let _ = tokio::fs::remove_file(&staged_path).await;
        }
        written
    }

    async fn remove_profile(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(self.persistence_error("remove", &error)),
        }
    }

    fn persistence_error(&self, action: &str, error: &std::io::Error) -> AppError {
        AppError::Persistence(format!(
            "failed to {action} profile file '{}': {error}",
            self.path.display()
        ))
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let extension = match path.extension().and_then(|extension| extension.to_str()) {
        Some(existing) => format!("{existing}.{TEMP_SUFFIX}"),
        None => TEMP_SUFFIX.to_owned(),
    };
    path.with_extension(extension)
}

async fn write_synced(path: &Path, document: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(document).await?;
    file.sync_all().await
}

#[async_trait]
impl ProfileStore for JsonFileProfileStore {
    async fn load_profile(&self) -> AppResult<Option<UserProfile>> {
        let document = match tokio::fs::read(&self.path).await {
            Ok(document) => document,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.persistence_error("read", &error)),
        };

        match serde_json::from_slice::<UserProfile>(&document) {
            Ok(profile) => Ok(Some(profile)),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    error = %error,
                    "stored profile could not be decoded, treating as absent"
                );
                Ok(None)
            }
        }
    }

    async fn save_profile(&self, profile: Option<UserProfile>) -> AppResult<()> {
        debug!(
            path = %self.path.display(),
            has_profile = profile.is_some(),
            "saving profile"
        );

        match profile {
            Some(profile) => self.write_profile(&profile).await,
            None => self.remove_profile().await,
        }
    }
}
