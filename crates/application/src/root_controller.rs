use std::sync::Arc;

use editable_profile_core::AppResult;
use tracing::info;

use crate::profile_ports::{ProfileStore, RootButton, RootView};

/// Title of the always visible register button.
pub const REGISTER_BUTTON_TITLE: &str = "Register new user";

/// Title of the button that edits the stored profile.
pub const CHANGE_PROFILE_BUTTON_TITLE: &str = "Change existing profile";

/// Controller for the root screen offering register and edit actions.
#[derive(Clone)]
pub struct RootController {
    profile_store: Arc<dyn ProfileStore>,
    view: Arc<dyn RootView>,
}

impl RootController {
    /// Creates a root screen controller.
    #[must_use]
    pub fn new(profile_store: Arc<dyn ProfileStore>, view: Arc<dyn RootView>) -> Self {
        Self {
            profile_store,
            view,
        }
    }

    /// Shows the root buttons; editing is hidden until a profile is stored.
    pub async fn show(&self) -> AppResult<()> {
        let is_registered = self.profile_store.is_registered().await?;

        self.view.show_buttons(
            RootButton {
                title: REGISTER_BUTTON_TITLE.to_owned(),
                is_hidden: false,
            },
            RootButton {
                title: CHANGE_PROFILE_BUTTON_TITLE.to_owned(),
                is_hidden: !is_registered,
            },
        );

        Ok(())
    }

    /// Removes the stored profile and refreshes the buttons.
    pub async fn unregister(&self) -> AppResult<()> {
        self.profile_store.save_profile(None).await?;
        info!("stored profile removed");
        self.show().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex, PoisonError};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use editable_profile_core::AppResult;
    use editable_profile_domain::{Attribute, Location, Picture, UserProfile};

    use super::{CHANGE_PROFILE_BUTTON_TITLE, REGISTER_BUTTON_TITLE, RootController};
    use crate::profile_ports::{ProfileStore, RootButton, RootView};

    #[derive(Default)]
    struct FakeProfileStore {
        profile: tokio::sync::Mutex<Option<UserProfile>>,
    }

    #[async_trait]
    impl ProfileStore for FakeProfileStore {
        async fn load_profile(&self) -> AppResult<Option<UserProfile>> {
            Ok(self.profile.lock().await.clone())
        }

        async fn save_profile(&self, profile: Option<UserProfile>) -> AppResult<()> {
            *self.profile.lock().await = profile;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingRootView {
        buttons: Mutex<Vec<(RootButton, RootButton)>>,
    }

    impl RootView for RecordingRootView {
        fn show_buttons(&self, register: RootButton, change_profile: RootButton) {
            self.buttons
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((register, change_profile));
        }
    }

    impl RecordingRootView {
        fn last(&self) -> Option<(RootButton, RootButton)> {
            self.buttons
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .last()
                .cloned()
        }
    }

    fn stored_profile() -> UserProfile {
        UserProfile {
            picture: Picture::new(b"png".to_vec()).unwrap_or_else(|_| unreachable!()),
            secondary_picture: None,
            display_name: "Alex".to_owned(),
            real_name: "Tony".to_owned(),
            location: Location::new("56°09'N", "10°13'E", "Aarhus"),
            birthday: Utc
                .with_ymd_and_hms(1990, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            gender: Attribute::new("g1", "Male"),
            ethnicity: None,
            religion: None,
            figure: None,
            marital_status: Attribute::new("m1", "Single"),
            height: None,
            occupation: None,
            about_me: None,
        }
    }

    #[tokio::test]
    async fn unregistered_user_sees_only_register_button() {
        let store = Arc::new(FakeProfileStore::default());
        let view = Arc::new(RecordingRootView::default());
        let controller = RootController::new(store, view.clone());

        assert!(controller.show().await.is_ok());

        let Some((register, change_profile)) = view.last() else {
            panic!("buttons should be shown");
        };
        assert_eq!(register.title, REGISTER_BUTTON_TITLE);
        assert!(!register.is_hidden);
        assert_eq!(change_profile.title, CHANGE_PROFILE_BUTTON_TITLE);
        assert!(change_profile.is_hidden);
    }

    #[tokio::test]
    async fn registered_user_sees_both_buttons() {
        let store = Arc::new(FakeProfileStore::default());
        *store.profile.lock().await = Some(stored_profile());
        let view = Arc::new(RecordingRootView::default());
        let controller = RootController::new(store, view.clone());

        assert!(controller.show().await.is_ok());

        let Some((register, change_profile)) = view.last() else {
            panic!("buttons should be shown");
        };
        assert!(!register.is_hidden);
        assert!(!change_profile.is_hidden);
    }

    #[tokio::test]
    async fn unregister_clears_store_and_hides_edit() {
        let store = Arc::new(FakeProfileStore::default());
        *store.profile.lock().await = Some(stored_profile());
        let view = Arc::new(RecordingRootView::default());
        let controller = RootController::new(store.clone(), view.clone());

        assert!(controller.unregister().await.is_ok());

        assert!(store.profile.lock().await.is_none());
        let Some((_, change_profile)) = view.last() else {
            panic!("buttons should be shown");
        };
        assert!(change_profile.is_hidden);
    }
}
