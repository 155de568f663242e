use std::sync::Arc;

use async_trait::async_trait;
use editable_profile_application::{ProfileStore, ReferenceFetcher};
use editable_profile_core::{AppError, AppResult};
use editable_profile_domain::{Attribute, AttributeCatalog, LocationCatalog};
use editable_profile_infrastructure::{InMemoryProfileStore, parse_locations};
use uuid::Uuid;

use super::{ConsoleApp, Flow};
use crate::command::Command;
use crate::console_view::ConsoleView;
use crate::file_image_picker::FileImagePicker;

struct StaticReferenceFetcher;

#[async_trait]
impl ReferenceFetcher for StaticReferenceFetcher {
    async fn fetch_attributes(&self) -> AppResult<AttributeCatalog> {
        Ok(AttributeCatalog::new(
            vec![Attribute::new("g1", "Male"), Attribute::new("g2", "Female")],
            vec![Attribute::new("e1", "Other")],
            vec![Attribute::new("r1", "None")],
            vec![Attribute::new("f1", "Slim")],
            vec![Attribute::new("m1", "Single")],
        ))
    }

    async fn fetch_locations(&self) -> AppResult<LocationCatalog> {
        parse_locations(r#"{"cities":[{"lat":"56°09'N","lon":"10°13'E","city":"Aarhus"}]}"#)
    }
}

fn app(store: Arc<InMemoryProfileStore>) -> ConsoleApp {
    ConsoleApp::new(
        Arc::new(StaticReferenceFetcher),
        store,
        Arc::new(FileImagePicker::new()),
        Arc::new(ConsoleView::new()),
    )
}

async fn run(app: &mut ConsoleApp, line: &str) -> AppResult<Flow> {
    let command = line.parse::<Command>()?;
    app.handle(command).await
}

#[tokio::test]
async fn registering_through_commands_persists_profile() {
    let image_path = std::env::temp_dir().join(format!("editable-profile-{}.png", Uuid::new_v4()));
    assert!(tokio::fs::write(&image_path, b"\x89PNG").await.is_ok());

    let store = Arc::new(InMemoryProfileStore::new());
    let mut app = app(store.clone());
    assert!(app.start().await.is_ok());

    let image_command = format!("tap profile_image {}", image_path.display());
    for line in [
        "register",
        image_command.as_str(),
        "set display_name Alex",
        "set real_name Tony",
        "set location aa",
        "choose location 0",
        "date birth_day 1990-01-15",
        "choose gender g2",
        "choose marital_status m1",
        "set height 180",
    ] {
        assert!(run(&mut app, line).await.is_ok(), "command failed: {line}");
    }
    assert!(app.is_form_open());

    assert!(matches!(run(&mut app, "done").await, Ok(Flow::Continue)));
    assert!(!app.is_form_open());

    let stored = store.load_profile().await.unwrap_or_else(|_| unreachable!());
    let Some(profile) = stored else {
        panic!("profile should be stored");
    };
    assert_eq!(profile.display_name, "Alex");
    assert_eq!(profile.location.city(), "Aarhus");
    assert_eq!(profile.height, Some(180));
    assert_eq!(profile.picture.as_bytes(), b"\x89PNG");

    let _ = tokio::fs::remove_file(&image_path).await;
}

#[tokio::test]
async fn invalid_submit_keeps_form_open() {
    let store = Arc::new(InMemoryProfileStore::new());
    let mut app = app(store.clone());

    assert!(run(&mut app, "register").await.is_ok());
    assert!(run(&mut app, "done").await.is_ok());

    assert!(app.is_form_open());
    assert!(matches!(store.is_registered().await, Ok(false)));
}

#[tokio::test]
async fn edit_requires_stored_profile() {
    let mut app = app(Arc::new(InMemoryProfileStore::new()));

    assert!(matches!(
        run(&mut app, "edit").await,
        Err(AppError::NotFound(_))
    ));
    assert!(!app.is_form_open());
}

#[tokio::test]
async fn form_commands_need_an_open_form() {
    let mut app = app(Arc::new(InMemoryProfileStore::new()));

    assert!(matches!(
        run(&mut app, "set display_name Alex").await,
        Err(AppError::Conflict(_))
    ));

    assert!(run(&mut app, "register").await.is_ok());
    assert!(matches!(
        run(&mut app, "register").await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        run(&mut app, "unregister").await,
        Err(AppError::Conflict(_))
    ));

    assert!(run(&mut app, "cancel").await.is_ok());
    assert!(!app.is_form_open());
    assert!(matches!(run(&mut app, "quit").await, Ok(Flow::Quit)));
}
