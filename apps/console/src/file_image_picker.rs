use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use editable_profile_application::ImagePicker;
use editable_profile_domain::Picture;
use tracing::warn;

/// Image picker reading the file path queued by the last `tap` command.
#[derive(Debug, Default)]
pub struct FileImagePicker {
    pending: Mutex<Option<PathBuf>>,
}

impl FileImagePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the file returned by the next pick; `None` makes it a cancel.
    pub fn queue(&self, path: Option<PathBuf>) {
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = path;
    }
}

#[async_trait]
impl ImagePicker for FileImagePicker {
    async fn pick_image(&self) -> Option<Picture> {
        let path = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!(path = %path.display(), error = %error, "failed to read image file");
                return None;
            }
        };

        match Picture::new(bytes) {
            Ok(picture) => Some(picture),
            Err(error) => {
                warn!(path = %path.display(), error = %error, "image file rejected");
                None
            }
        }
    }
}
