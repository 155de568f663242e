use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use editable_profile_application::ProfileStore;
use editable_profile_core::AppError;
use editable_profile_domain::{Attribute, Location, Picture, UserProfile};
use uuid::Uuid;

use super::{JsonFileProfileStore, temp_path};

fn unique_profile_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("editable-profile-{}", Uuid::new_v4()))
        .join("profile.json")
}

fn profile() -> UserProfile {
    UserProfile {
        picture: Picture::new(vec![0x89, b'P', b'N', b'G']).unwrap_or_else(|_| unreachable!()),
        secondary_picture: None,
        display_name: "Alex".to_owned(),
        real_name: "Tony".to_owned(),
        location: Location::new("56°09'N", "10°13'E", "Aarhus"),
        birthday: Utc
            .with_ymd_and_hms(1990, 1, 15, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        gender: Attribute::new("g2", "Female"),
        ethnicity: None,
        religion: Some(Attribute::new("r1", "None")),
        figure: None,
        marital_status: Attribute::new("m1", "Single"),
        height: Some(172),
        occupation: None,
        about_me: Some("Hiking".to_owned()),
    }
}

#[tokio::test]
async fn missing_file_reads_as_no_profile() {
    let store = JsonFileProfileStore::new(unique_profile_path());

    let loaded = store.load_profile().await;
    assert!(matches!(loaded, Ok(None)));
    assert!(matches!(store.is_registered().await, Ok(false)));
}

#[tokio::test]
async fn saved_profile_is_read_back() {
    let path = unique_profile_path();
    let store = JsonFileProfileStore::new(path.clone());

    assert!(store.save_profile(Some(profile())).await.is_ok());
    let loaded = store.load_profile().await;
    assert!(loaded.is_ok());
    assert_eq!(loaded.unwrap_or_else(|_| unreachable!()), Some(profile()));

    let document = tokio::fs::read_to_string(&path)
        .await
        .unwrap_or_else(|_| unreachable!());
    assert!(document.contains("\"picture\": \"iVBORw==\""));
    assert!(!document.contains("secondary_picture"));
    assert!(!tokio::fs::try_exists(temp_path(&path)).await.unwrap_or(true));

    if let Some(parent) = path.parent() {
        let _ = tokio::fs::remove_dir_all(parent).await;
    }
}

#[tokio::test]
async fn saving_none_removes_the_profile() {
    let path = unique_profile_path();
    let store = JsonFileProfileStore::new(path.clone());

    assert!(store.save_profile(Some(profile())).await.is_ok());
    assert!(matches!(store.is_registered().await, Ok(true)));

    assert!(store.save_profile(None).await.is_ok());
    assert!(matches!(store.load_profile().await, Ok(None)));
    assert!(store.save_profile(None).await.is_ok());

    if let Some(parent) = path.parent() {
        let _ = tokio::fs::remove_dir_all(parent).await;
    }
}

#[tokio::test]
async fn undecodable_document_reads_as_no_profile() {
    let path = unique_profile_path();
    if let Some(parent) = path.parent() {
        assert!(tokio::fs::create_dir_all(parent).await.is_ok());
    }
    assert!(tokio::fs::write(&path, b"{\"display_name\":").await.is_ok());

    let store = JsonFileProfileStore::new(path.clone());
    assert!(matches!(store.load_profile().await, Ok(None)));

    if let Some(parent) = path.parent() {
        let _ = tokio::fs::remove_dir_all(parent).await;
    }
}

#[test]
fn temp_file_sits_next_to_target() {
    assert_eq!(
        temp_path(std::path::Path::new("/data/profile.json")),
        PathBuf::from("/data/profile.json.tmp")
    );
    assert_eq!(
        temp_path(std::path::Path::new("/data/profile")),
        PathBuf::from("/data/profile.tmp")
    );
}

#[tokio::test]
async fn failed_write_keeps_previous_profile() {
    let path = unique_profile_path();
    let store = JsonFileProfileStore::new(path.clone());
    assert!(store.save_profile(Some(profile())).await.is_ok());

    // A directory in place of the temp file makes the next write fail.
    assert!(tokio::fs::create_dir(temp_path(&path)).await.is_ok());

    let mut changed = profile();
    changed.display_name = "Changed".to_owned();
    let saved = store.save_profile(Some(changed)).await;
    assert!(matches!(saved, Err(AppError::Persistence(_))));

    let loaded = store.load_profile().await;
    assert!(matches!(loaded, Ok(Some(ref stored)) if *stored == profile()));

    if let Some(parent) = path.parent() {
        let _ = tokio::fs::remove_dir_all(parent).await;
    }
}
